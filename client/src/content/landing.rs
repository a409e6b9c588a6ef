//! SEO landing page content: feature cards, pricing tiers and testimonials.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub perks: &'static [&'static str],
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const KEYWORDS: &[&str] = &[
    "thuê phòng",
    "phòng trọ giá rẻ",
    "cho thuê phòng",
    "căn hộ mini",
    "phòng trọ TP. Hồ Chí Minh",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🔍",
        title: "Tìm phòng thông minh",
        description: "Lọc theo khu vực, giá và tiện ích để tìm đúng căn phòng bạn cần.",
    },
    Feature {
        icon: "✅",
        title: "Tin đăng đã xác minh",
        description: "Hình ảnh thực tế, thông tin chính xác, không tin ảo.",
    },
    Feature {
        icon: "💬",
        title: "Liên hệ trực tiếp",
        description: "Trao đổi thẳng với chủ nhà, không mất phí môi giới.",
    },
    Feature {
        icon: "📱",
        title: "Mọi lúc, mọi nơi",
        description: "Dùng trên trình duyệt hoặc ứng dụng di động.",
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Cơ bản",
        price: "0đ",
        period: "/tháng",
        perks: &["3 tin đăng mỗi tháng", "Hiển thị 14 ngày", "Hỗ trợ qua email"],
        highlighted: false,
    },
    PricingTier {
        name: "Tiêu chuẩn",
        price: "199.000đ",
        period: "/tháng",
        perks: &["20 tin đăng mỗi tháng", "Hiển thị 30 ngày", "Đẩy tin 5 lần", "Hỗ trợ ưu tiên"],
        highlighted: true,
    },
    PricingTier {
        name: "Chuyên nghiệp",
        price: "499.000đ",
        period: "/tháng",
        perks: &["Không giới hạn tin đăng", "Tin nổi bật trang chủ", "Báo cáo lượt xem", "Quản lý viên riêng"],
        highlighted: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Tìm được phòng ưng ý chỉ sau hai ngày, ảnh đúng như thực tế.",
        author: "Hoàng Yến",
        role: "Sinh viên, Quận 10",
    },
    Testimonial {
        quote: "Phòng của tôi luôn kín người thuê từ khi đăng trên đây.",
        author: "Chú Tư",
        role: "Chủ nhà, Bình Thạnh",
    },
    Testimonial {
        quote: "Giao diện dễ dùng, liên hệ chủ nhà rất nhanh.",
        author: "Minh Khoa",
        role: "Nhân viên văn phòng, Quận 7",
    },
];
