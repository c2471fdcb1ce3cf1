use super::{EnvironmentCard, LawCard, TipCard};

pub static ENVIRONMENT_CARDS: &[EnvironmentCard] = &[
    EnvironmentCard {
        icon: "🌍",
        title: "Giảm khí thải CO2",
        description: "Lái xe an toàn giúp tiết kiệm nhiên liệu và giảm lượng khí thải.",
        image_query: "eco-friendly-driving-reduce-emissions",
        benefits: &[
            "Giảm consumption xăng 10-15%",
            "Giảm khí thải carbon",
            "Tiết kiệm chi phí nhiên liệu",
            "Bảo vệ khí hậu toàn cầu",
        ],
    },
    EnvironmentCard {
        icon: "🌱",
        title: "Lái xe thẳng tĩnh",
        description: "Tránh tăng tốc đột ngột và phanh gấp rút ngắn tuổi thọ engine.",
        image_query: "smooth-driving-eco-friendly",
        benefits: &[
            "Kéo dài tuổi thọ động cơ",
            "Giảm hao mòn công cụ",
            "Tiết kiệm chi phí bảo dưỡng",
            "Tốt cho môi trường",
        ],
    },
    EnvironmentCard {
        icon: "♻️",
        title: "Tái chế và bảo trì",
        description: "Xe được bảo dưỡng tốt ít ô nhiễm hơn và dễ tái chế.",
        image_query: "vehicle-maintenance-recycling",
        benefits: &[
            "Bảo dưỡng định kỳ",
            "Thay dầu đúng thời hạn",
            "Kiểm tra hệ thống xả khí",
            "Giảm rác thải công nghiệp",
        ],
    },
    EnvironmentCard {
        icon: "🚗",
        title: "Lái xe hợp lý",
        description: "Sử dụng công cộng hoặc share car giúp giảm tổng số xe trên đường.",
        image_query: "carpooling-public-transport",
        benefits: &[
            "Giảm tắc đường",
            "Tiết kiệm xăng dầu",
            "Giảm ô nhiễm không khí",
            "Xây dựng cộng đồng",
        ],
    },
];

pub static TIPS: &[TipCard] = &[
    TipCard {
        icon: "🚗",
        title: "Kiểm tra xe trước khi lên đường",
        description: "Đây là bước quan trọng để đảm bảo an toàn khi lái xe.",
        image_query: "car-inspection-checklist",
        points: &[
            "Kiểm tra bánh xe, lưu lượng khí",
            "Kiểm tra hệ thống phanh và đèn",
            "Kiểm tra gương chiếu hậu",
            "Đầy đủ nước làm mát động cơ",
        ],
    },
    TipCard {
        icon: "⏱️",
        title: "Tốc độ phù hợp",
        description: "Tốc độ là yếu tố chính gây ra tai nạn giao thông.",
        image_query: "safe-driving-speed",
        points: &[
            "Tuân thủ biển báo tốc độ",
            "Giảm tốc độ trong thành phố",
            "Cẩn thận vào ban đêm",
            "Điều chỉnh tốc độ theo thời tiết",
        ],
    },
    TipCard {
        icon: "😴",
        title: "Tránh lái xe khi mệt mỏi",
        description: "Người lái mệt mỏi có thời gian phản ứng chậm hơn.",
        image_query: "rest-break-while-driving",
        points: &[
            "Nghỉ ngơi 15 phút sau 2 giờ lái",
            "Không lái đêm khuya nếu mệt",
            "Hạn chế uống cà phê nhiều",
            "Ngủ đủ trước khi lên đường",
        ],
    },
    TipCard {
        icon: "👨‍👩‍👧‍👦",
        title: "Bảo vệ hành khách",
        description: "Tất cả hành khách cần được bảo vệ an toàn.",
        image_query: "passenger-safety-seatbelt",
        points: &[
            "Yêu cầu mọi người thắt dây an toàn",
            "Trẻ em phải ngồi ghế an toàn",
            "Không để trẻ em vừa mặt ngoài",
            "Tắt điện thoại khi lái xe",
        ],
    },
];

pub static LAWS: &[LawCard] = &[
    LawCard {
        icon: "⚖️",
        title: "Luật về thắt dây an toàn",
        description: "Luật bắt buộc tất cả những người trên xe phải thắt dây an toàn.",
        image_query: "seatbelt-safety-law",
        regulation: "Theo Luật Giao thông Đường bộ, người lái và hành khách phải thắt dây an toàn.",
        penalty: Some("Phạt tiền từ 100.000 - 200.000 đồng"),
    },
    LawCard {
        icon: "🍷",
        title: "Lái xe khi say rượu",
        description: "Điều này là hành vi cực kỳ nguy hiểm và bị pháp luật nghiêm cấm.",
        image_query: "drunk-driving-prohibited",
        regulation: "Lái xe khi có nồng độ cồn trong máu từ 0,05% trở lên là vi phạm pháp luật.",
        penalty: Some("Phạt tiền 16-20 triệu đồng, tước giấy phép 16-24 tháng"),
    },
    LawCard {
        icon: "📱",
        title: "Sử dụng điện thoại khi lái xe",
        description: "Sử dụng điện thoại di động khi lái xe rất nguy hiểm.",
        image_query: "no-phone-while-driving",
        regulation: "Người lái xe không được cầm máy điện thoại, máy phát hoặc máy thu thanh.",
        penalty: Some("Phạt tiền 100.000 - 200.000 đồng"),
    },
    LawCard {
        icon: "🚦",
        title: "Vượt đèn đỏ",
        description: "Vượt đèn đỏ là một trong những vi phạm giao thông phổ biến.",
        image_query: "red-light-traffic-rules",
        regulation: "Người lái phải dừng hoàn toàn khi gặp đèn đỏ.",
        penalty: Some("Phạt tiền 300.000 - 500.000 đồng, tước giấy phép 1 tháng"),
    },
];
