use crate::models::Listing;
use chrono::Datelike;
use std::borrow::Cow;

pub const DEFAULT_FILENAME: &str = "properties.csv";

/// Byte order mark so spreadsheet programs detect UTF-8
pub const BOM: char = '\u{feff}';

pub const CSV_HEADERS: [&str; 17] = [
    "이름",
    "타입",
    "거래유형",
    "가격 (원)",
    "보증금 (원)",
    "월세 (원)",
    "면적 (㎡)",
    "시/도",
    "구",
    "동",
    "주소",
    "건축년도",
    "층수",
    "향",
    "주차",
    "엘리베이터",
    "등록일",
];

/// Render listings as a BOM-prefixed CSV document with CRLF line endings
pub fn to_csv<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> String {
    let mut out = String::new();
    out.push(BOM);
    push_row(&mut out, CSV_HEADERS.iter().map(|h| h.to_string()));

    for listing in listings {
        push_row(&mut out, row(listing));
    }

    out
}

/// Normalize a requested download name; blank means the default and
/// `.xlsx` becomes `.csv`
pub fn export_filename(requested: Option<&str>) -> String {
    let name = match requested.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return DEFAULT_FILENAME.to_string(),
    };

    match name.strip_suffix(".xlsx") {
        Some(stem) => format!("{}.csv", stem),
        None => name.to_string(),
    }
}

/// `Content-Disposition` value for a download named `filename`.
///
/// `filename` carries an ASCII fallback (anything outside `[A-Za-z0-9._-]`
/// becomes `_`); `filename*` carries the full UTF-8 name percent-encoded.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

fn row(listing: &Listing) -> [String; 17] {
    let amount = |value: Option<u64>| value.map_or_else(|| "-".to_string(), format_amount);
    let created = listing.created_at.date_naive();

    [
        listing.name.clone(),
        listing.property_type.label().to_string(),
        listing.transaction_type().label().to_string(),
        amount(listing.deal.price()),
        amount(listing.deal.deposit()),
        amount(listing.deal.monthly_rent()),
        listing.area.to_string(),
        listing.region.clone(),
        listing.district.clone(),
        listing.neighborhood.clone(),
        listing.address.clone(),
        listing.build_year.to_string(),
        format!("{}/{}", listing.floor, listing.total_floors),
        listing.direction.label().to_string(),
        if listing.parking { "가능" } else { "불가" }.to_string(),
        if listing.elevator { "있음" } else { "없음" }.to_string(),
        format!("{}. {}. {}.", created.year(), created.month(), created.day()),
    ]
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(&field));
    }
    out.push_str("\r\n");
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// 1234567 -> "1,234,567"
fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
