/// Multipart field carrying the uploaded screenshot
pub const UPLOAD_FIELD: &str = "animeImage";

/// Form field carrying the image URL
pub const URL_FIELD: &str = "imageUrl";

/// Public path prefix the transient upload directory is served under
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Public path prefix for stylesheets and other static assets
pub const STATIC_ROUTE: &str = "/static";

/// Room for multipart boundaries and part headers on top of the file size limit
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub const APP_NAME: &str = "SceneLens";
