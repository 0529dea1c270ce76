//! Sequential bookmark publishing for a whole collection.

use super::client::BookmarkService;
use super::types::BookmarkRequest;
use crate::config::Credentials;
use crate::error::Result;
use crate::sanitize::for_file_path;
use crate::types::PoiCollection;

/// Progress notifications emitted while publishing.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishEvent<'a> {
    /// About to log in.
    Authorizing,

    /// A bookmark was created.
    Posted { category: &'a str, name: String },
}

/// Authorize once, then create one bookmark per record.
///
/// Categories are processed in sorted order. The first failure stops the
/// run; bookmarks created before it are kept.
///
/// # Returns
/// Number of bookmarks created.
pub fn publish_bookmarks<S, F>(
    service: &mut S,
    credentials: &Credentials,
    pois: &PoiCollection,
    mut on_event: F,
) -> Result<usize>
where
    S: BookmarkService + ?Sized,
    F: FnMut(PublishEvent<'_>),
{
    on_event(PublishEvent::Authorizing);
    service.authorize(credentials)?;

    let mut posted = 0;
    for (category, records) in pois {
        for record in records {
            let wgs = record.to_wgs84();
            let address = service.lookup_address(wgs)?;
            let request = BookmarkRequest::new(
                wgs.lat,
                wgs.lon,
                for_file_path(&record.name),
                bookmark_address(&address),
            );

            let bookmark = service.create_bookmark(&request)?;
            posted += 1;
            on_event(PublishEvent::Posted {
                category,
                name: bookmark.name.unwrap_or(request.name),
            });
        }
    }

    tracing::info!(posted, "Published bookmarks");
    Ok(posted)
}

/// Address text as stored in a bookmark: no whitespace, file-path safe.
fn bookmark_address(address: &str) -> String {
    let compact: String = address.chars().filter(|c| !c.is_whitespace()).collect();
    for_file_path(&compact)
}
