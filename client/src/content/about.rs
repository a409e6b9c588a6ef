//! About page content: company stats, values, history and team.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

/// A headline figure shown in the stats strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry on the company timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
}

/// Figures that are not derivable from the arrays below.
const FIXED_STATS: &[(&str, &str)] = &[
    ("12.000+", "Phòng đã đăng"),
    ("35.000+", "Người thuê hài lòng"),
    ("8", "Tỉnh thành phủ sóng"),
];

pub const VALUES: &[CoreValue] = &[
    CoreValue {
        icon: "🛡️",
        title: "Minh bạch",
        description: "Mọi tin đăng đều được kiểm duyệt, giá và hình ảnh phản ánh đúng thực tế.",
    },
    CoreValue {
        icon: "⚡",
        title: "Nhanh chóng",
        description: "Tìm và liên hệ chủ nhà chỉ trong vài phút, không qua trung gian.",
    },
    CoreValue {
        icon: "🤝",
        title: "Tận tâm",
        description: "Đội ngũ hỗ trợ luôn sẵn sàng giải đáp cho cả người thuê và chủ nhà.",
    },
    CoreValue {
        icon: "🌱",
        title: "Bền vững",
        description: "Xây dựng cộng đồng thuê nhà lâu dài, công bằng cho mọi bên.",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: 2019,
        title: "Khởi đầu",
        description: "Nhóm sáng lập ra mắt trang đăng tin phòng trọ đầu tiên tại TP. Hồ Chí Minh.",
    },
    Milestone {
        year: 2020,
        title: "Kiểm duyệt tin đăng",
        description: "Ra mắt quy trình xác minh tin đăng và hình ảnh thực tế.",
    },
    Milestone {
        year: 2022,
        title: "Mở rộng ra Hà Nội",
        description: "Có mặt tại Hà Nội và Đà Nẵng với hơn 5.000 phòng.",
    },
    Milestone {
        year: 2024,
        title: "Ứng dụng di động",
        description: "Phát hành ứng dụng cho iOS và Android.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Nguyễn Minh Anh",
        role: "Đồng sáng lập & CEO",
        avatar: "/images/team/minh-anh.svg",
        bio: "Mười năm kinh nghiệm trong lĩnh vực bất động sản cho thuê.",
    },
    TeamMember {
        name: "Trần Quốc Bảo",
        role: "Đồng sáng lập & CTO",
        avatar: "/images/team/quoc-bao.svg",
        bio: "Phụ trách nền tảng kỹ thuật và sản phẩm.",
    },
    TeamMember {
        name: "Lê Thu Hà",
        role: "Trưởng nhóm Chăm sóc khách hàng",
        avatar: "/images/team/thu-ha.svg",
        bio: "Đảm bảo mọi câu hỏi được phản hồi trong ngày.",
    },
    TeamMember {
        name: "Phạm Đức Long",
        role: "Trưởng nhóm Kiểm duyệt",
        avatar: "/images/team/duc-long.svg",
        bio: "Giữ chất lượng tin đăng luôn ở mức cao nhất.",
    },
];

/// Years between the first and the latest timeline milestone.
pub fn years_of_operation(timeline: &[Milestone]) -> u16 {
    let first = timeline.iter().map(|m| m.year).min();
    let last = timeline.iter().map(|m| m.year).max();
    match (first, last) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    }
}

/// Stats strip: fixed marketing figures followed by values derived from the
/// team and timeline arrays.
pub fn stats(team: &[TeamMember], timeline: &[Milestone]) -> Vec<Stat> {
    let mut out: Vec<Stat> = FIXED_STATS
        .iter()
        .map(|&(value, label)| Stat { value: value.to_owned(), label })
        .collect();
    out.push(Stat { value: format!("{}+", years_of_operation(timeline)), label: "Năm hoạt động" });
    out.push(Stat { value: team.len().to_string(), label: "Thành viên nòng cốt" });
    out
}
