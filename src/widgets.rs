mod conversion_card;

pub use conversion_card::ConversionCard;
