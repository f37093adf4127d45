//! Google Maps listing export reader.
//!
//! The export is a header-less CSV whose columns are fixed by position.
//! Rows that are not shop listings (headers, ads, repeated results) are
//! skipped and reported, not treated as errors.

use super::{
    DataError, Shop, ShopId,
    types::{clean_value, order_link},
};
use crate::log;
use std::{collections::HashSet, path::Path};

/// Only place pages count as listings
const PLACE_LINK_PREFIX: &str = "https://www.google.com/maps/place";

/// Separator the export puts in empty service cells
const EMPTY_SERVICE: &str = "·";

/// Column positions in the export
mod col {
    use std::ops::Range;

    pub const MAP_LINK: usize = 4;
    pub const NAME: usize = 5;
    pub const RATING: usize = 6;
    pub const REVIEWS: usize = 7;
    pub const PRICE: usize = 9;
    pub const CATEGORY: usize = 10;
    pub const ADDRESS: usize = 12;
    pub const STATUS: usize = 13;
    pub const HOURS: usize = 14;
    pub const IMAGE: usize = 15;
    pub const SERVICES: Range<usize> = 16..21;
    pub const ORDER_LINK: usize = 21;

    /// Rows shorter than this cannot hold a name
    pub const MIN_LEN: usize = NAME + 1;
}

/// Why a row was not turned into a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    TooShort,
    NotAPlace,
    NoName,
    Repeated,
}

/// Read all shop listings from a Maps export.
pub fn load(path: &Path) -> Result<Vec<Shop>, DataError> {
    let bytes = std::fs::read(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
    parse(&bytes).map_err(|err| DataError::Csv(path.to_path_buf(), err))
}

/// A row that was not turned into a shop, by 1-based line in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SkippedRow {
    line: u64,
    reason: Skip,
}

/// Parse export contents into shops, keeping the first row per map link.
pub fn parse(bytes: &[u8]) -> Result<Vec<Shop>, ::csv::Error> {
    let (shops, skipped) = parse_rows(bytes)?;

    for row in &skipped {
        // Header rows and blank lines are expected noise
        if row.reason != Skip::TooShort && row.reason != Skip::NotAPlace {
            log!("skip"; "line {}: {:?}", row.line, row.reason);
        }
    }
    if !skipped.is_empty() {
        log!("skip"; "{} rows are not shop listings", skipped.len());
    }
    Ok(shops)
}

fn parse_rows(bytes: &[u8]) -> Result<(Vec<Shop>, Vec<SkippedRow>), ::csv::Error> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut shops = Vec::new();
    let mut skipped = Vec::new();
    let mut seen_links = HashSet::new();

    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(clean_value).collect();

        match parse_row(&row, &mut seen_links) {
            Ok(shop) => shops.push(shop),
            Err(reason) => skipped.push(SkippedRow {
                // Quoted cells may span lines, so the record index is not the line
                line: record.position().map_or(0, |pos| pos.line()),
                reason,
            }),
        }
    }

    Ok((shops, skipped))
}

/// Turn one cleaned row into a shop.
fn parse_row(row: &[String], seen_links: &mut HashSet<String>) -> Result<Shop, Skip> {
    if row.len() < col::MIN_LEN {
        return Err(Skip::TooShort);
    }

    let field = |idx: usize| row.get(idx).cloned().unwrap_or_default();
    let map_link = field(col::MAP_LINK);
    let name = field(col::NAME);

    if !map_link.starts_with(PLACE_LINK_PREFIX) {
        return Err(Skip::NotAPlace);
    }
    if name.is_empty() {
        return Err(Skip::NoName);
    }
    if !seen_links.insert(map_link.clone()) {
        return Err(Skip::Repeated);
    }

    let services = row
        .get(col::SERVICES)
        .or_else(|| row.get(col::SERVICES.start..))
        .unwrap_or_default()
        .iter()
        .filter(|value| !value.is_empty() && value.as_str() != EMPTY_SERVICE)
        .cloned()
        .collect();

    Ok(Shop {
        id: ShopId::from_name(&name),
        rating: field(col::RATING),
        reviews: field(col::REVIEWS),
        price: field(col::PRICE),
        category: field(col::CATEGORY),
        address: field(col::ADDRESS),
        status: field(col::STATUS),
        hours: field(col::HOURS),
        image: field(col::IMAGE),
        order_link: order_link(&field(col::ORDER_LINK)),
        services,
        map_link,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a full-width export row from (column, value) pairs.
    fn row(cells: &[(usize, &str)]) -> String {
        let mut columns = vec![String::new(); 22];
        for (idx, value) in cells {
            columns[*idx] = format!("\"{value}\"");
        }
        columns.join(",")
    }

    const LINK: &str = "https://www.google.com/maps/place/shop-a";

    #[test]
    fn test_parse_full_row() {
        let csv = row(&[
            (col::MAP_LINK, LINK),
            (col::NAME, "\u{3000}晨間廚房 "),
            (col::RATING, "4.5"),
            (col::REVIEWS, "(120)"),
            (col::PRICE, "$1-200"),
            (col::CATEGORY, "早餐店"),
            (col::ADDRESS, "南屯路一段 1 號"),
            (col::STATUS, "營業中"),
            (col::HOURS, "06:00–13:00"),
            (col::IMAGE, "https://img.example/a.jpg"),
            (16, "內用"),
            (17, "·"),
            (18, "外帶"),
            (col::ORDER_LINK, "https://order.example/a"),
        ]);
        let shops = parse(csv.as_bytes()).unwrap();

        assert_eq!(shops.len(), 1);
        let shop = &shops[0];
        assert_eq!(shop.name, "晨間廚房");
        assert_eq!(shop.id, ShopId::from_name("晨間廚房"));
        assert_eq!(shop.map_link, LINK);
        assert_eq!(shop.rating, "4.5");
        assert_eq!(shop.reviews, "(120)");
        assert_eq!(shop.price, "$1-200");
        assert_eq!(shop.address, "南屯路一段 1 號");
        assert_eq!(shop.hours, "06:00–13:00");
        assert_eq!(shop.services, vec!["內用", "外帶"]);
        assert_eq!(shop.order_link.as_deref(), Some("https://order.example/a"));
    }

    #[test]
    fn test_parse_skips_header_and_non_places() {
        let csv = [
            row(&[(col::MAP_LINK, "link"), (col::NAME, "name")]),
            row(&[(col::MAP_LINK, "https://www.google.com/maps/search/x"), (col::NAME, "Ad")]),
            row(&[(col::MAP_LINK, LINK), (col::NAME, "Real")]),
        ]
        .join("\n");
        let shops = parse(csv.as_bytes()).unwrap();

        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name, "Real");
    }

    #[test]
    fn test_parse_skips_empty_name_and_repeated_link() {
        let csv = [
            row(&[(col::MAP_LINK, LINK), (col::NAME, "  ")]),
            row(&[(col::MAP_LINK, LINK), (col::NAME, "First")]),
            row(&[(col::MAP_LINK, LINK), (col::NAME, "Again")]),
        ]
        .join("\n");
        let shops = parse(csv.as_bytes()).unwrap();

        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name, "First");
    }

    #[test]
    fn test_parse_short_rows() {
        let csv = format!("a,b,c\n,,,,{LINK},Short Row\n");
        let shops = parse(csv.as_bytes()).unwrap();

        // Six columns are enough; missing fields are empty
        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name, "Short Row");
        assert_eq!(shops[0].address, "");
        assert!(shops[0].services.is_empty());
        assert_eq!(shops[0].order_link, None);
    }

    #[test]
    fn test_parse_partial_service_columns() {
        let csv = format!(",,,,{LINK},Partial,,,,,,,,,,,內用,外送\n");
        let shops = parse(csv.as_bytes()).unwrap();
        assert_eq!(shops[0].services, vec!["內用", "外送"]);
    }

    #[test]
    fn test_parse_drops_relative_order_link() {
        let csv = row(&[
            (col::MAP_LINK, LINK),
            (col::NAME, "Shop"),
            (col::ORDER_LINK, "線上訂餐"),
        ]);
        let shops = parse(csv.as_bytes()).unwrap();
        assert_eq!(shops[0].order_link, None);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let csv = [
            row(&[(col::MAP_LINK, "https://www.google.com/maps/place/2"), (col::NAME, "B")]),
            row(&[(col::MAP_LINK, "https://www.google.com/maps/place/1"), (col::NAME, "A")]),
        ]
        .join("\n");
        let names: Vec<_> = parse(csv.as_bytes())
            .unwrap()
            .into_iter()
            .map(|shop| shop.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_skipped_rows_report_file_lines() {
        // The first listing has a quoted address spanning two lines
        let csv = format!(
            ",,,,{LINK},First,,,,,,,\"Line one\nLine two\"\n\
             ,,,,{LINK},Repeat\n\
             ,,,,{LINK},,\n"
        );
        let (shops, skipped) = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].address, "Line one\nLine two");
        assert_eq!(
            skipped,
            vec![
                SkippedRow { line: 3, reason: Skip::Repeated },
                SkippedRow { line: 4, reason: Skip::NoName },
            ]
        );
    }
}
