pub mod cmd {
    pub const LIST: &str = "loma list";
    pub const SHOW: &str = "loma show <ID>";
    pub const DEMO: &str = "loma demo";
    pub const DEMO_HOTEL: &str = "loma demo --hotel";
    pub const BROWSE: &str = "loma browse";
    pub const CHECK: &str = "loma check";
    pub const USE_CATALOG: &str = "loma --catalog <PATH> list";
}

pub mod fmt {
    pub fn show(id: impl std::fmt::Display) -> String {
        format!("loma show {}", id)
    }

    pub fn show_photo(id: impl std::fmt::Display, photo: usize) -> String {
        format!("loma show {} --photo {}", id, photo)
    }

    pub fn check(path: &str) -> String {
        format!("loma check {}", path)
    }
}
