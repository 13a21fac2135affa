//! User-facing labels per locale.

use serde::Deserialize;

/// Language of the rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Bahasa Indonesia.
    Id,
}

/// Headings and axis labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub sample_heading: &'static str,
    pub missing_heading: &'static str,
    pub column: &'static str,
    pub missing: &'static str,
    pub rows_dropped: &'static str,
    pub status_heading: &'static str,
    pub status_axis: &'static str,
    pub order_count_axis: &'static str,
    pub category_heading: &'static str,
    pub category_axis: &'static str,
    pub average_axis: &'static str,
    pub revenue_heading: &'static str,
    pub date_axis: &'static str,
    pub revenue_axis: &'static str,
    pub payment_heading: &'static str,
    pub payment_axis: &'static str,
    pub payment_count_axis: &'static str,
    pub most_common: &'static str,
    pub rfm_heading: &'static str,
    pub customer: &'static str,
    pub recency: &'static str,
    pub frequency: &'static str,
    pub monetary: &'static str,
    pub no_data: &'static str,
}

static EN: Labels = Labels {
    sample_heading: "Sample Data from Orders",
    missing_heading: "Missing Values in Datasets",
    column: "Column",
    missing: "Missing",
    rows_dropped: "rows dropped",
    status_heading: "Order Status Distribution",
    status_axis: "Order Status",
    order_count_axis: "Number of Orders",
    category_heading: "Average Order Value by Product Category",
    category_axis: "Product Category",
    average_axis: "Average Value (R$)",
    revenue_heading: "Monthly Revenue",
    date_axis: "Date",
    revenue_axis: "Revenue (R$)",
    payment_heading: "Most Common Payment Methods",
    payment_axis: "Payment Method",
    payment_count_axis: "Number of Payments",
    most_common: "most common",
    rfm_heading: "RFM Summary",
    customer: "customer_id",
    recency: "recency",
    frequency: "frequency",
    monetary: "monetary",
    no_data: "(no data)",
};

static ID: Labels = Labels {
    sample_heading: "Contoh Data Pesanan",
    missing_heading: "Nilai Kosong dalam Dataset",
    column: "Kolom",
    missing: "Kosong",
    rows_dropped: "baris dihapus",
    status_heading: "Distribusi Pesanan Menurut Status Pesanan",
    status_axis: "Status Pesanan",
    order_count_axis: "Jumlah Pesanan",
    category_heading: "Nilai Pesanan Rata-rata Berdasarkan Kategori Produk",
    category_axis: "Kategori Produk",
    average_axis: "Nilai Rata-rata (R$)",
    revenue_heading: "Pendapatan Bulanan",
    date_axis: "Tanggal",
    revenue_axis: "Pendapatan (R$)",
    payment_heading: "Metode Pembayaran Paling Umum",
    payment_axis: "Metode Pembayaran",
    payment_count_axis: "Jumlah Pembayaran",
    most_common: "paling umum",
    rfm_heading: "Analisis RFM",
    customer: "customer_id",
    recency: "recency",
    frequency: "frequency",
    monetary: "monetary",
    no_data: "(tidak ada data)",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Id => &ID,
        }
    }
}
