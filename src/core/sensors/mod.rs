//! Temperature and fan sensors: raw scraping, categorization and the
//! display sections built from them.

pub mod categorize;
pub mod scraper;
pub mod sections;

pub use categorize::{
    categorize, classify_fan, classify_fan_with, classify_temperature, classify_temperature_with,
    FanCategory, Keywords, SensorBuckets, TempCategory,
};
pub use scraper::{read_sensors, scan_sensors, SensorOrigin, SensorSample};
pub use sections::{build_sections, RowValue, SensorRow, SensorSection, SensorSections};
