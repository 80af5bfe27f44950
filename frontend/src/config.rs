/// Where the contact endpoint lives. Debug builds talk to the local backend,
/// release builds are served by it and use relative URLs.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}
