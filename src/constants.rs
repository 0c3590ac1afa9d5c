pub const KKPHIM_BASE_URL: &str = "https://phimapi.com";

pub mod limits {

    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub const DEFAULT_MAX_PAGES: u32 = 5;

    /// Discovery draws sample upstream pages 1..=this bound.
    pub const DISCOVERY_MAX_PAGE: u32 = 5;

    pub const DEFAULT_DISCOVERY_DRAWS: u32 = 5;
}

pub mod categories {

    /// Top-level list types served under `/v1/api/danh-sach/{type}`.
    pub const TYPE_LISTS: &[&str] = &["phim-le", "phim-bo", "tv-shows", "hoat-hinh"];

    /// Genre slugs served under `/v1/api/the-loai/{genre}`.
    pub const GENRES: &[&str] = &[
        "hanh-dong",
        "co-trang",
        "chien-tranh",
        "vien-tuong",
        "kinh-di",
        "tai-lieu",
        "bi-an",
        "tinh-cam",
        "tam-ly",
        "the-thao",
        "phieu-luu",
        "am-nhac",
        "gia-dinh",
        "hoc-duong",
        "hai-huoc",
        "hinh-su",
        "vo-thuat",
        "khoa-hoc",
        "than-thoai",
        "chinh-kich",
        "kinh-dien",
    ];

    /// Latest-updates feed under the plain `/danh-sach/` prefix.
    pub const LATEST_FEED: &str = "phim-moi-cap-nhat";
}
