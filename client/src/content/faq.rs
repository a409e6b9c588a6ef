//! Support page questions and answers.

/// A single FAQ entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Làm thế nào để đăng ký tài khoản?",
        answer: "Nhấn nút \"Đăng ký\" ở góc trên bên phải, nhập số điện thoại hoặc email và làm theo hướng dẫn xác thực.",
    },
    FaqEntry {
        question: "Tôi có thể đăng tin cho thuê phòng miễn phí không?",
        answer: "Có. Gói Cơ bản cho phép đăng tối đa 3 tin miễn phí mỗi tháng. Các gói trả phí giúp tin của bạn hiển thị nổi bật hơn.",
    },
    FaqEntry {
        question: "Làm sao để đặt lịch xem phòng?",
        answer: "Trên trang chi tiết phòng, chọn \"Liên hệ\" để gửi yêu cầu. Chủ nhà sẽ phản hồi trong vòng 24 giờ.",
    },
    FaqEntry {
        question: "Tiền cọc được xử lý như thế nào?",
        answer: "Tiền cọc được thỏa thuận trực tiếp giữa người thuê và chủ nhà. Chúng tôi khuyến nghị lập hợp đồng đặt cọc bằng văn bản.",
    },
    FaqEntry {
        question: "Tin đăng của tôi bao lâu thì được duyệt?",
        answer: "Phần lớn tin đăng được duyệt trong vòng 2 giờ làm việc.",
    },
    FaqEntry {
        question: "Tôi quên mật khẩu, phải làm sao?",
        answer: "Chọn \"Quên mật khẩu\" ở màn hình đăng nhập, hệ thống sẽ gửi mã đặt lại qua email hoặc SMS.",
    },
    FaqEntry {
        question: "Làm thế nào để báo cáo tin đăng sai sự thật?",
        answer: "Nhấn \"Báo cáo\" trên tin đăng và mô tả vấn đề. Đội ngũ kiểm duyệt sẽ xử lý trong 24 giờ.",
    },
    FaqEntry {
        question: "Tôi có thể hủy gói dịch vụ trả phí không?",
        answer: "Bạn có thể hủy bất kỳ lúc nào trong phần Cài đặt. Gói sẽ hết hiệu lực vào cuối chu kỳ thanh toán hiện tại.",
    },
];
