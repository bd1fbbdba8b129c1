pub mod equipment;
pub mod site;
pub mod sites;
pub mod version;
