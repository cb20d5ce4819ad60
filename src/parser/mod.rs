pub mod fields;
pub mod text;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::record::{CompanyRecord, Field};
use fields::Rule;

static INFO_TBODY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.table-taxinfo > tbody").unwrap());
static TBODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Read the info table of a company detail page.
///
/// The info table is `table.table-taxinfo`, or failing that the first table body
/// with at least one known label. The HTML parser gives every table a body, so
/// layout tables are skipped by label rather than by tag. Returns `None` when no
/// table qualifies. Rows with fewer than two cells and rows with an unknown label
/// are ignored.
pub fn extract(html: &str, url: &str) -> Option<CompanyRecord> {
    let doc = Html::parse_document(html);
    let Some(rows) = doc
        .select(&INFO_TBODY_SEL)
        .chain(doc.select(&TBODY_SEL))
        .map(labeled_rows)
        .find(|rows| !rows.is_empty())
    else {
        warn!("No info table for URL: {}", url);
        return None;
    };

    let mut record = CompanyRecord::new(url);
    for (field, rule, value_cell) in rows {
        if let Some(value) = fields::apply(rule, value_cell) {
            record.set(field, value);
        }
    }
    Some(record)
}

/// Rows of `tbody` whose label is recognized, with their value cell.
fn labeled_rows(tbody: ElementRef) -> Vec<(Field, Rule, ElementRef)> {
    let mut rows = Vec::new();
    for row in tbody.select(&ROW_SEL) {
        let mut cells = row.select(&CELL_SEL);
        let (Some(label_cell), Some(value_cell)) = (cells.next(), cells.next()) else {
            continue;
        };
        let label = text::stripped(label_cell);
        match fields::match_label(&label) {
            Some((field, rule)) => rows.push((field, rule, value_cell)),
            None => debug!("Ignoring row {:?}", label),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    const URL: &str = "https://masothue.com/0101234567-cong-ty-tnhh-thuong-mai-an-phat";

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn full_page_populates_every_field() {
        let r = extract(&fixture("company_full"), URL).unwrap();
        assert_eq!(r.url, URL);
        assert_eq!(r.tax_code, "0101234567");
        assert_eq!(r.address, "Số 12 Phố Huế, Phường Hàng Bài, Quận Hoàn Kiếm, Hà Nội");
        assert_eq!(r.representative, "NGUYỄN VĂN AN");
        assert_eq!(r.phone, "0243 826 1234");
        assert_eq!(r.registration_date, "2015-03-12");
        assert_eq!(r.managed_by, "Chi cục Thuế Quận Hoàn Kiếm");
        assert_eq!(r.entity_type, "Công ty trách nhiệm hữu hạn ngoài NN");
        assert_eq!(r.status, "Đang hoạt động (đã được cấp GCN ĐKT)");
        assert_eq!(
            r.industry,
            "Bán buôn thực phẩm (Chi tiết: Bán buôn thủy sản, rau quả tươi)"
        );
        assert!(Field::COLUMNS.iter().all(|f| !r.get(*f).is_empty()));
    }

    #[test]
    fn page_without_table_is_absent() {
        assert!(extract(&fixture("no_table"), URL).is_none());
    }

    #[test]
    fn representative_takes_link_text_only() {
        let r = extract(&fixture("company_full"), URL).unwrap();
        assert!(!r.representative.contains("Ngoài ra"));
        assert!(!r.representative.contains("giám đốc"));
    }

    #[test]
    fn industry_is_single_line() {
        let r = extract(&fixture("company_full"), URL).unwrap();
        assert!(!r.industry.contains('\n'));
        assert!(!r.industry.contains("  "));
    }

    #[test]
    fn sparse_page_defaults_to_empty() {
        let r = extract(&fixture("company_sparse"), URL).unwrap();
        assert_eq!(r.tax_code, "0312345678");
        assert_eq!(r.representative, "TRẦN THỊ BÌNH");
        // Phone row has no copy span; date and managing authority rows are missing.
        assert_eq!(r.phone, "");
        assert_eq!(r.registration_date, "");
        assert_eq!(r.managed_by, "");
        // Status cell has no link.
        assert_eq!(r.status, "");
        assert_eq!(r.entity_type, "Doanh nghiệp tư nhân");
        assert_eq!(r.industry, "Dịch vụ lưu trú ngắn ngày");
    }

    #[test]
    fn unknown_and_short_rows_are_ignored() {
        let html = r#"<html><body><table><tbody>
            <tr><td colspan="2">Cập nhật lần cuối</td></tr>
            <tr><td>Tên quốc tế</td><td><span class="copy">AN PHAT CO., LTD</span></td></tr>
            <tr><td>Mã số thuế</td><td><span class="copy">0101234567</span></td></tr>
        </tbody></table></body></html>"#;
        let r = extract(html, URL).unwrap();
        assert_eq!(r.tax_code, "0101234567");
        assert_eq!(r.address, "");
    }

    #[test]
    fn table_without_known_labels_is_absent() {
        let html = "<table><tr><td>Tin tức</td><td>Xem thêm</td></tr></table>";
        assert!(extract(html, URL).is_none());
        assert!(extract("<table><tbody></tbody></table>", URL).is_none());
    }

    #[test]
    fn layout_table_before_info_table_is_skipped() {
        let html = r#"<html><body>
            <table class="layout"><tr><td>Trang chủ</td><td>Tra cứu</td></tr></table>
            <table><tbody>
                <tr><td>Mã số thuế</td><td><span class="copy">0101234567</span></td></tr>
            </tbody></table>
        </body></html>"#;
        let r = extract(html, URL).unwrap();
        assert_eq!(r.tax_code, "0101234567");
    }

    #[test]
    fn taxinfo_table_preferred_inside_layout_table() {
        let html = r#"<html><body><table class="layout"><tr><td>
            <table class="table-taxinfo"><tbody>
                <tr><td>Mã số thuế</td><td><span class="copy">0101234567</span></td></tr>
                <tr><td>Điện thoại</td><td><span class="copy">0243 826 1234</span></td></tr>
            </tbody></table>
        </td><td>Quảng cáo</td></tr></table></body></html>"#;
        let r = extract(html, URL).unwrap();
        assert_eq!(r.tax_code, "0101234567");
        assert_eq!(r.phone, "0243 826 1234");
    }
}
