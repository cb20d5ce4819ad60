/// One company as read from a masothue.com detail page.
///
/// Every field except `url` is empty when the page had no matching row or the
/// row's value element was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    pub url: String,
    pub tax_code: String,
    pub address: String,
    pub representative: String,
    pub phone: String,
    pub registration_date: String,
    pub managed_by: String,
    pub entity_type: String,
    pub status: String,
    pub industry: String,
}

/// Output columns. The header text of every column but `Url` is also the label
/// phrase printed in the page's info table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TaxCode,
    Address,
    Representative,
    Phone,
    RegistrationDate,
    ManagedBy,
    EntityType,
    Status,
    Industry,
    Url,
}

impl Field {
    /// Fixed spreadsheet column order.
    pub const COLUMNS: [Field; 10] = [
        Field::TaxCode,
        Field::Address,
        Field::Representative,
        Field::Phone,
        Field::RegistrationDate,
        Field::ManagedBy,
        Field::EntityType,
        Field::Status,
        Field::Industry,
        Field::Url,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Field::TaxCode => "Mã số thuế",
            Field::Address => "Địa chỉ",
            Field::Representative => "Người đại diện",
            Field::Phone => "Điện thoại",
            Field::RegistrationDate => "Ngày hoạt động",
            Field::ManagedBy => "Quản lý bởi",
            Field::EntityType => "Loại hình DN",
            Field::Status => "Tình trạng",
            Field::Industry => "Ngành nghề chính",
            Field::Url => "URL",
        }
    }
}

impl CompanyRecord {
    pub fn new(url: &str) -> Self {
        CompanyRecord {
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TaxCode => &self.tax_code,
            Field::Address => &self.address,
            Field::Representative => &self.representative,
            Field::Phone => &self.phone,
            Field::RegistrationDate => &self.registration_date,
            Field::ManagedBy => &self.managed_by,
            Field::EntityType => &self.entity_type,
            Field::Status => &self.status,
            Field::Industry => &self.industry,
            Field::Url => &self.url,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::TaxCode => &mut self.tax_code,
            Field::Address => &mut self.address,
            Field::Representative => &mut self.representative,
            Field::Phone => &mut self.phone,
            Field::RegistrationDate => &mut self.registration_date,
            Field::ManagedBy => &mut self.managed_by,
            Field::EntityType => &mut self.entity_type,
            Field::Status => &mut self.status,
            Field::Industry => &mut self.industry,
            Field::Url => &mut self.url,
        };
        *slot = value;
    }

    /// Values in `Field::COLUMNS` order.
    pub fn row(&self) -> [&str; 10] {
        Field::COLUMNS.map(|f| self.get(f))
    }
}
