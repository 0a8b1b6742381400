// src/build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/shelf.ico");
        res.set("FileDescription", "Shelf Scrape");
        res.compile().unwrap();
    }
}
