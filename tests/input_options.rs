// tests/input_options.rs
//
// Query list sources and option defaults/validation.

use std::fs;
use std::path::{Path, PathBuf};

use shelf_scrape::config::options::{
    AppOptions, ExportFormat, ExportOptions, ExtractMode, InputOptions, InputSource, KeyMode,
    KindChoice, ScrapeOptions,
};
use shelf_scrape::input::{load_queries, queries_from_csv, title_from_filename, titles_from_dir};
use shelf_scrape::model::{Query, QueryKind};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shelf_input_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const BOOKLIST: &str = "title,author,description\n\
Dune,Frank Herbert,Desert planet\n\
,,\n\
\n\
\"Hyperion, Book One\",Dan Simmons,\n\
Dune,Frank Herbert,dup\n\
Children of Dune,Frank Herbert\n";

#[test]
fn csv_titles_skip_header_blank_rows_and_duplicates() {
    let qs = queries_from_csv(BOOKLIST, KeyMode::Title, KindChoice::Book);
    assert_eq!(
        qs,
        vec![
            Query::book("Dune"),
            Query::book("Hyperion, Book One"),
            Query::book("Children of Dune"),
        ]
    );
}

#[test]
fn csv_authors_are_distinct_author_queries() {
    let qs = queries_from_csv(BOOKLIST, KeyMode::Author, KindChoice::Book);
    assert_eq!(qs, vec![Query::author("Frank Herbert"), Query::author("Dan Simmons")]);
}

#[test]
fn csv_without_header_keeps_first_row() {
    let qs = queries_from_csv("Dune,Frank Herbert\r\nThe Stand,Stephen King", KeyMode::Title, KindChoice::Book);
    assert_eq!(qs.len(), 2);
    assert_eq!(qs[1].text, "The Stand");
}

#[test]
fn auto_kind_looks_for_by() {
    assert_eq!(KindChoice::Auto.resolve("Dune by Frank Herbert"), QueryKind::Book);
    assert_eq!(KindChoice::Auto.resolve("Frank Herbert"), QueryKind::Author);
    assert_eq!(KindChoice::Book.resolve("Frank Herbert"), QueryKind::Book);
}

#[test]
fn filename_convention_keeps_title() {
    assert_eq!(title_from_filename("Frank Herbert - Dune.epub"), "Dune");
    assert_eq!(title_from_filename("Dune.epub"), "Dune");
    assert_eq!(title_from_filename("01 - The Stand.pdf"), "The Stand");
    assert_eq!(title_from_filename("Hyperion"), "Hyperion");
}

#[test]
fn directory_source_lists_files_sorted() {
    let dir = tmp_dir("dir");
    fs::write(dir.join("B Author - The Stand.epub"), "").unwrap();
    fs::write(dir.join("A Author - Dune.epub"), "").unwrap();
    fs::write(dir.join("C Author - Dune.mobi"), "").unwrap();
    fs::create_dir_all(dir.join("subdir")).unwrap();

    assert_eq!(titles_from_dir(&dir).unwrap(), ["Dune", "The Stand"]);

    let opts = InputOptions {
        source: InputSource::Directory(dir.clone()),
        key: KeyMode::Title,
        kind: KindChoice::Book,
    };
    let qs = load_queries(&opts).unwrap();
    assert_eq!(qs, vec![Query::book("Dune"), Query::book("The Stand")]);
}

#[test]
fn missing_directory_is_config_error() {
    let err = titles_from_dir(Path::new("/definitely/not/here")).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn csv_source_reads_file() {
    let dir = tmp_dir("csv");
    let path = dir.join("booklist.csv");
    fs::write(&path, BOOKLIST).unwrap();

    let opts = InputOptions { source: InputSource::Csv(path), ..InputOptions::default() };
    assert_eq!(load_queries(&opts).unwrap().len(), 3);
}

#[test]
fn default_out_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(opts.out_path(), Path::new("out").join("goodreads_results.csv"));
    opts.format = ExportFormat::Report;
    assert_eq!(opts.out_path(), Path::new("out").join("goodreads_results.txt"));
    assert!(opts.is_default_path());

    opts.set_path("mine");
    assert_eq!(opts.out_path(), PathBuf::from("mine.txt"));
    opts.set_path("mine.csv");
    assert_eq!(opts.out_path(), PathBuf::from("mine.csv"));
    opts.set_path("   ");
    assert!(opts.is_default_path());
}

#[test]
fn scrape_defaults() {
    let s = ScrapeOptions::default();
    assert_eq!(s.mode, ExtractMode::Rendered);
    assert_eq!(s.origin(), "https://www.goodreads.com");
    assert_eq!(s.pause_ms, 2_000);
    assert_eq!(s.settle_ms, 3_000);
    assert_eq!(s.author_limit, 20);
    assert!(s.validate().is_ok());
}

#[test]
fn scrape_validation_rejects_bad_values() {
    let bad_origin = ScrapeOptions { base_url: "goodreads.com".into(), ..ScrapeOptions::default() };
    assert!(bad_origin.validate().unwrap_err().is_config());

    let no_cap = ScrapeOptions { author_limit: 0, ..ScrapeOptions::default() };
    assert!(no_cap.validate().is_err());
}

#[test]
fn options_load_from_toml() {
    let dir = tmp_dir("toml");
    let path = dir.join("shelf_scrape.toml");
    fs::write(
        &path,
        r#"
[input]
source = { directory = "books" }
kind = "auto"

[scrape]
mode = "static"
pause_ms = 500
prior = { mean = 3.8 }

[export]
format = "tsv"
"#,
    )
    .unwrap();

    let opts = AppOptions::load(&path).unwrap();
    assert_eq!(opts.input.source, InputSource::Directory(PathBuf::from("books")));
    assert_eq!(opts.input.kind, KindChoice::Auto);
    assert_eq!(opts.input.key, KeyMode::Title);
    assert_eq!(opts.scrape.mode, ExtractMode::Static);
    assert_eq!(opts.scrape.pause_ms, 500);
    assert_eq!(opts.scrape.prior.mean, 3.8);
    assert_eq!(opts.scrape.prior.count, 10_000);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
}

#[test]
fn invalid_toml_is_config_error() {
    let dir = tmp_dir("bad_toml");
    let path = dir.join("bad.toml");
    fs::write(&path, "[scrape]\nprior = { mean = 9.0 }\n").unwrap();
    assert!(AppOptions::load(&path).unwrap_err().is_config());

    fs::write(&path, "[scrape]\nmode = \"sometimes\"\n").unwrap();
    assert!(AppOptions::load(&path).unwrap_err().is_config());
}
