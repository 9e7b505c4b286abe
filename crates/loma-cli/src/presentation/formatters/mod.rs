pub mod attribute;
pub mod date;
pub mod price;
pub mod style;

pub use attribute::format_attribute_value;
pub use date::{format_date, format_timestamp_date};
pub use price::format_price_cents;
pub use style::Palette;
