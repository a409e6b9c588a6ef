//! Sample room shown by the room detail page.

/// Postal address of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub country: &'static str,
}

/// WGS84 coordinates of a listing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rentable room. Built once as a literal and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Monthly price in `currency` minor-free units.
    pub price: u64,
    pub currency: &'static str,
    /// Floor area in square metres.
    pub area: f64,
    pub images: &'static [&'static str],
    pub amenities: &'static [&'static str],
    pub address: PostalAddress,
    pub coordinates: GeoPoint,
}

pub const SAMPLE_ROOM: Room = Room {
    id: "phong-studio-quan-3",
    title: "Phòng studio ban công, gần chợ Bàn Cờ",
    description: "Phòng studio 28m² đầy đủ nội thất, ban công thoáng, cửa sổ lớn đón nắng. \
                  Khu vực yên tĩnh, an ninh 24/7, cách trung tâm Quận 1 chỉ 10 phút di chuyển.",
    price: 6_500_000,
    currency: "VND",
    area: 28.0,
    images: &[
        "/images/rooms/studio-q3-living.svg",
        "/images/rooms/studio-q3-kitchen.svg",
        "/images/rooms/studio-q3-bathroom.svg",
        "/images/rooms/studio-q3-balcony.svg",
    ],
    amenities: &[
        "Máy lạnh",
        "Wi-Fi tốc độ cao",
        "Máy giặt riêng",
        "Bếp từ",
        "Ban công",
        "Chỗ để xe máy",
    ],
    address: PostalAddress {
        street: "125 Nguyễn Đình Chiểu",
        locality: "Quận 3",
        region: "TP. Hồ Chí Minh",
        country: "VN",
    },
    coordinates: GeoPoint { latitude: 10.776_889, longitude: 106.688_042 },
};

