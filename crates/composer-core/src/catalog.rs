//! Catalog page parsing.
//!
//! A CompOSE dataset page links the data archive (`.../eos.zip`) and its
//! reference digest (`.../eos.zip_checksum.txt`). Links are picked by their
//! final path segment and re-rooted on the catalog origin.

use crate::error::CatalogError;
use crate::url_model::last_path_segment;
use scraper::{Html, Node};
use url::Url;

/// Final path segment of the archive link.
pub const ARCHIVE_FILENAME: &str = "eos.zip";
/// Final path segment of the checksum link.
pub const CHECKSUM_FILENAME: &str = "eos.zip_checksum.txt";

/// Absolute links found on one dataset's catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub archive_url: Url,
    pub checksum_url: Url,
}

/// URL of the catalog page for dataset `id`. The ID is used verbatim.
pub fn catalog_url(base: &Url, id: &str) -> String {
    format!("{}/eos/{}", base.as_str().trim_end_matches('/'), id)
}

/// Extracts the archive and checksum links from `html`.
///
/// Every `href` of every `<a>` is resolved against `page_url`; when its final
/// path segment matches, the path is re-rooted on `base`. The whole document
/// is scanned and a later match replaces an earlier one. Broken markup is
/// not an error by itself; it only matters if the links can't be found.
pub fn parse_catalog_page(
    html: &str,
    page_url: &Url,
    base: &Url,
) -> Result<CatalogEntry, CatalogError> {
    let document = Html::parse_document(html);
    let mut archive_url = None;
    let mut checksum_url = None;

    for node in document.tree.root().descendants() {
        let Node::Element(element) = node.value() else {
            continue;
        };
        if element.name() != "a" {
            continue;
        }
        for (name, value) in element.attrs() {
            if name != "href" {
                continue;
            }
            let Ok(link) = page_url.join(value) else {
                tracing::debug!("skipping unparseable href {:?}", value);
                continue;
            };
            // mailto:, javascript: and friends have no path to take a segment from.
            if link.cannot_be_a_base() {
                continue;
            }
            let slot = match last_path_segment(&link) {
                Some(ARCHIVE_FILENAME) => &mut archive_url,
                Some(CHECKSUM_FILENAME) => &mut checksum_url,
                _ => continue,
            };
            let resolved = rebase(base, &link);
            tracing::debug!("catalog link {} -> {}", value, resolved);
            *slot = Some(resolved);
        }
    }

    match (archive_url, checksum_url) {
        (Some(archive_url), Some(checksum_url)) => Ok(CatalogEntry {
            archive_url,
            checksum_url,
        }),
        (None, _) => Err(CatalogError::NoDataFound { missing: "archive" }),
        (Some(_), None) => Err(CatalogError::NoDataFound { missing: "checksum" }),
    }
}

/// `base` origin with `link`'s path; query and fragment are dropped.
fn rebase(base: &Url, link: &Url) -> Url {
    let mut out = base.clone();
    out.set_path(link.path());
    out.set_query(None);
    out.set_fragment(None);
    out
}
