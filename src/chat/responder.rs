//! Keyword-rule reply generator.
//!
//! Replies are canned strings. The input is lower-cased and checked against
//! an ordered rule table; the first rule with a matching keyword wins. Rules
//! are independent substring checks, so an input can match several of them
//! and the table order decides. Do not reorder `RULES`.

/// Topic recognised by a keyword rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Alcohol,
    Seatbelt,
    Speed,
    Phone,
    Fatigue,
}

impl Topic {
    /// Short tag used in log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Alcohol => "alcohol",
            Topic::Seatbelt => "seatbelt",
            Topic::Speed => "speed",
            Topic::Phone => "phone",
            Topic::Fatigue => "fatigue",
        }
    }

    /// The canned reply for this topic.
    pub fn reply(&self) -> &'static str {
        match self {
            Topic::Greeting => GREETING_REPLY,
            Topic::Alcohol => ALCOHOL_REPLY,
            Topic::Seatbelt => SEATBELT_REPLY,
            Topic::Speed => SPEED_REPLY,
            Topic::Phone => PHONE_REPLY,
            Topic::Fatigue => FATIGUE_REPLY,
        }
    }
}

/// A keyword rule: any keyword contained in the lower-cased input selects the topic.
struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

/// Ordered rule table. Keywords must be lower-case.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        keywords: &["xin chào", "hello"],
    },
    Rule {
        topic: Topic::Alcohol,
        keywords: &["nồng độ cồn", "say rượu"],
    },
    Rule {
        topic: Topic::Seatbelt,
        keywords: &["dây an toàn", "seatbelt"],
    },
    Rule {
        topic: Topic::Speed,
        keywords: &["tốc độ"],
    },
    Rule {
        topic: Topic::Phone,
        keywords: &["điện thoại", "phone"],
    },
    Rule {
        topic: Topic::Fatigue,
        keywords: &["mệt", "buồn ngủ"],
    },
];

pub const GREETING_REPLY: &str = "Xin chào! Mình rất vui được gặp bạn. Mình có thể giúp bạn về lái xe an toàn, luật giao thông, hoặc bất kỳ câu hỏi nào về an toàn đường bộ. Bạn muốn biết về cái gì?";

pub const ALCOHOL_REPLY: &str = "Rất quan trọng! Lái xe say rượu là rất nguy hiểm. Nếu bạn đã uống rượu, hãy gọi taxi hoặc nhờ người khác lái. Theo pháp luật, người lái có nồng độ cồn từ 0,05% trở lên sẽ bị phạt 16-20 triệu đồng và tước giấy phép 16-24 tháng.";

pub const SEATBELT_REPLY: &str = "Dây an toàn là thiết bị cứu mạng! Luôn thắt dây an toàn trước khi khởi động xe. Nó giảm nguy cơ tử vong đến 50%. Nhớ yêu cầu tất cả hành khách trên xe cũng thắt dây an toàn nhé!";

pub const SPEED_REPLY: &str = "Tốc độ phù hợp rất quan trọng! Hãy tuân thủ biển báo giới hạn tốc độ và điều chỉnh tốc độ theo điều kiện đường bộ (mưa, đêm tối, khu dân cư...). Nhớ: không vội vàng, đến nơi an toàn là mục tiêu!";

pub const PHONE_REPLY: &str = "Tuyệt đối không sử dụng điện thoại khi lái xe! Điều này rất nguy hiểm vì nó làm mất tập trung. Nếu cần, hãy dừng xe an toàn rồi trả lời. Người vi phạm sẽ bị phạt 100.000 - 200.000 đồng.";

pub const FATIGUE_REPLY: &str = "Nếu bạn cảm thấy mệt, hãy dừng xe lại! Nghỉ ngơi 15-20 phút là rất cần thiết. Không bao giờ lái xe khi mệt, vì thời gian phản ứng sẽ chậm hơn. An toàn của bạn và người khác là ưu tiên hàng đầu!";

/// Returned when no rule matches.
pub const FALLBACK_REPLY: &str = "Cảm ơn câu hỏi của bạn! Tôi có thể giúp bạn về: luật giao thông, mẹo lái xe an toàn, quy tắc giao thông, và những điều cần chú ý khi lái xe. Bạn có thể hỏi cụ thể hơn nhé!";

/// Return the first topic whose keywords occur in `input` (case-insensitive).
pub fn classify(input: &str) -> Option<Topic> {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.topic)
}

/// Produce the bot reply for a user message. Never fails, never empty.
pub fn generate_reply(input: &str) -> &'static str {
    classify(input).map_or(FALLBACK_REPLY, |topic| topic.reply())
}
