//! Site scrapers.
//!
//! One scraper per site, each following the same two-phase pattern:
//!
//! 1. **Indexing**: discover issue URLs from the archive listing page
//! 2. **Scraping**: download each issue page and extract project records
//!
//! The only supported site today is [`gazelle`]. Scrapers keep their parsing
//! functions pure (HTML text in, records out) so extraction is testable
//! without a network.

pub mod gazelle;
