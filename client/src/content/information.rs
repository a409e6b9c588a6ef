//! Information page content: contact channels and platform facts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// `tel:`, `mailto:` or web link; `None` renders plain text.
    pub href: Option<&'static str>,
}

/// A label/value row in the platform facts table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemInfo {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACTS: &[ContactChannel] = &[
    ContactChannel { icon: "📞", label: "Hotline", value: "1900 6868", href: Some("tel:19006868") },
    ContactChannel {
        icon: "✉️",
        label: "Email",
        value: "hotro@phongtot.vn",
        href: Some("mailto:hotro@phongtot.vn"),
    },
    ContactChannel {
        icon: "📍",
        label: "Văn phòng",
        value: "125 Nguyễn Đình Chiểu, Quận 3, TP. Hồ Chí Minh",
        href: None,
    },
    ContactChannel { icon: "🕘", label: "Giờ làm việc", value: "08:00 – 21:00, Thứ Hai – Chủ Nhật", href: None },
];

pub const SYSTEM_INFO: &[SystemInfo] = &[
    SystemInfo { label: "Phiên bản", value: env!("CARGO_PKG_VERSION") },
    SystemInfo { label: "Khu vực phục vụ", value: "TP. Hồ Chí Minh, Hà Nội, Đà Nẵng" },
    SystemInfo { label: "Thời gian duyệt tin", value: "Trong vòng 2 giờ làm việc" },
    SystemInfo { label: "Thanh toán", value: "Chuyển khoản, ví điện tử, thẻ nội địa" },
    SystemInfo { label: "Ngôn ngữ", value: "Tiếng Việt" },
];

pub const POLICIES: &[(&str, &str)] = &[
    ("Điều khoản sử dụng", "/terms"),
    ("Chính sách bảo mật", "/privacy"),
    ("Quy chế đăng tin", "/posting-rules"),
];
