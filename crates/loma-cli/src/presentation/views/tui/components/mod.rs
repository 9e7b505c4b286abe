mod carousel;

pub use carousel::PhotoCarouselComponent;
