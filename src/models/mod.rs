pub mod analysis;
pub mod card;
pub mod chart;
pub mod grade;
pub mod image;
pub mod portfolio;

pub use analysis::*;
pub use card::*;
pub use chart::*;
pub use grade::*;
pub use image::*;
pub use portfolio::*;

/// Read a nullable text column as a plain string, `null` becoming empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
