pub const PAGES_ROUTE: &str = "/pages";

pub fn page_route(page_id: &str) -> String {
    format!("{}/{}", PAGES_ROUTE, page_id)
}
