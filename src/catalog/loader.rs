// One-shot catalog loader.
// Resolves where the `{ "data": [...] }` document lives (embedded, local file or http(s) URL),
// reads it once and validates it. The caller decides what a failure means (empty catalog).

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

use super::{CatalogDocument, LoadError, UseCase};

/// Sample catalog bundled into the binary, used when no source is configured.
pub const EMBEDDED_CATALOG: &str = include_str!("use-case-data.json");

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("use-case-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Url(Url),
}

/// Where a card image should be read from once resolved against the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageLocation {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// `None` or blank selects the embedded catalog; anything with a scheme must be
    /// http(s) or file, everything else is treated as a filesystem path.
    pub fn parse(raw: Option<&str>) -> Result<Self, LoadError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(CatalogSource::Embedded);
        };
        if !raw.contains("://") {
            return Ok(CatalogSource::File(PathBuf::from(raw)));
        }
        let url = Url::parse(raw)
            .map_err(|e| LoadError::UnsupportedSource(format!("{raw}: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(CatalogSource::Url(url)),
            "file" => url
                .to_file_path()
                .map(CatalogSource::File)
                .map_err(|_| LoadError::UnsupportedSource(raw.to_string())),
            other => Err(LoadError::UnsupportedSource(format!(
                "{raw}: scheme '{other}' is not supported"
            ))),
        }
    }

    /// Resolve a record's `image` field. Absolute http(s) URLs are used as-is,
    /// relative references are taken relative to the catalog document.
    pub fn resolve_image(&self, image: &str) -> Option<ImageLocation> {
        let image = image.trim();
        if image.is_empty() {
            return None;
        }
        if let Ok(url) = Url::parse(image) {
            return match url.scheme() {
                "http" | "https" => Some(ImageLocation::Remote(url)),
                "file" => url.to_file_path().ok().map(ImageLocation::Local),
                _ => None,
            };
        }
        match self {
            CatalogSource::Url(base) => base.join(image).ok().map(ImageLocation::Remote),
            CatalogSource::File(path) => {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                Some(ImageLocation::Local(base.join(image)))
            }
            CatalogSource::Embedded => Some(ImageLocation::Local(PathBuf::from(image))),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => f.write_str("embedded catalog"),
            CatalogSource::File(p) => write!(f, "{}", p.display()),
            CatalogSource::Url(u) => write!(f, "{u}"),
        }
    }
}

/// Parse and validate a catalog document. Ids must be unique.
pub fn parse_document(text: &str) -> Result<Vec<UseCase>, LoadError> {
    let doc: CatalogDocument = serde_json::from_str(text)?;
    let mut seen = HashSet::with_capacity(doc.data.len());
    for record in &doc.data {
        if !seen.insert(record.id) {
            return Err(LoadError::DuplicateId(record.id));
        }
    }
    Ok(doc.data)
}

pub async fn fetch_catalog(source: &CatalogSource) -> Result<Vec<UseCase>, LoadError> {
    let text = match source {
        CatalogSource::Embedded => return parse_document(EMBEDDED_CATALOG),
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?,
        CatalogSource::Url(url) => {
            let resp = CLIENT.get(url.clone()).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            resp.text().await?
        }
    };
    let records = parse_document(&text)?;
    log::info!("Read {} use cases from {}", records.len(), source);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UseCaseId;

    fn temp_catalog_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let records = parse_document(EMBEDDED_CATALOG).expect("embedded catalog parses");
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn optional_fields_default() {
        let records = parse_document(r#"{"data":[{"id":3,"name":"Bare"}]}"#).unwrap();
        assert_eq!(records[0].id, UseCaseId(3));
        assert!(records[0].tags.is_empty());
        assert!(records[0].attributes.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_document(r#"{"data":[{"id":1,"name":"A"},{"id":1,"name":"B"}]}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(UseCaseId(1))));
    }

    #[test]
    fn missing_data_field_is_a_parse_error() {
        let err = parse_document(r#"[{"id":1,"name":"A"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn source_parsing() {
        assert_eq!(CatalogSource::parse(None).unwrap(), CatalogSource::Embedded);
        assert_eq!(CatalogSource::parse(Some("  ")).unwrap(), CatalogSource::Embedded);
        assert_eq!(
            CatalogSource::parse(Some("lib/use-case-data.json")).unwrap(),
            CatalogSource::File(PathBuf::from("lib/use-case-data.json"))
        );
        assert!(matches!(
            CatalogSource::parse(Some("https://example.org/data.json")).unwrap(),
            CatalogSource::Url(_)
        ));
        assert!(matches!(
            CatalogSource::parse(Some("ftp://example.org/data.json")),
            Err(LoadError::UnsupportedSource(_))
        ));
    }

    #[test]
    fn images_resolve_against_the_source() {
        let remote = CatalogSource::parse(Some("https://example.org/lib/data.json")).unwrap();
        assert_eq!(
            remote.resolve_image("img/blog.png"),
            Some(ImageLocation::Remote(
                Url::parse("https://example.org/lib/img/blog.png").unwrap()
            ))
        );

        let local = CatalogSource::File(PathBuf::from("lib/data.json"));
        assert_eq!(
            local.resolve_image("img/blog.png"),
            Some(ImageLocation::Local(PathBuf::from("lib/img/blog.png")))
        );
        assert!(matches!(
            local.resolve_image("https://cdn.example.org/a.jpg"),
            Some(ImageLocation::Remote(_))
        ));
        assert_eq!(local.resolve_image(""), None);
    }

    #[tokio::test]
    async fn reads_catalog_from_file() {
        let path = temp_catalog_path("use_case_catalog_ok");
        std::fs::write(
            &path,
            r#"{"data":[{"id":1,"name":"Blog","tags":["writing"]},{"id":2,"name":"Art","tags":["design"]}]}"#,
        )
        .unwrap();

        let records = fetch_catalog(&CatalogSource::File(path.clone())).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Art");

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let path = temp_catalog_path("use_case_catalog_missing");
        let _ = std::fs::remove_file(&path);
        let err = fetch_catalog(&CatalogSource::File(path)).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let path = temp_catalog_path("use_case_catalog_bad");
        std::fs::write(&path, "{ not json").unwrap();
        let err = fetch_catalog(&CatalogSource::File(path.clone())).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        let _ = std::fs::remove_file(path);
    }
}
