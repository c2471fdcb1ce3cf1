//! Static traffic-safety content shown in the three tabs.
//!
//! Everything here is `'static` and read-only; the renderer only borrows it.

mod data;

pub use data::{ENVIRONMENT_CARDS, LAWS, TIPS};

/// Eco-driving advice card ("Bảo vệ Môi trường" tab).
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_query: &'static str,
    pub benefits: &'static [&'static str],
}

/// Driving tip card ("Tips Lái xe" tab).
#[derive(Debug, Clone, Copy)]
pub struct TipCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_query: &'static str,
    pub points: &'static [&'static str],
}

/// Traffic law card ("Luật Giao thông" tab).
#[derive(Debug, Clone, Copy)]
pub struct LawCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_query: &'static str,
    pub regulation: &'static str,
    pub penalty: Option<&'static str>,
}

/// Turn an image query slug into a readable caption ("car-inspection-checklist"
/// becomes "car inspection checklist").
pub fn image_caption(query: &str) -> String {
    query.split('-').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_dataset_has_four_cards() {
        assert_eq!(ENVIRONMENT_CARDS.len(), 4);
        assert_eq!(TIPS.len(), 4);
        assert_eq!(LAWS.len(), 4);
    }

    #[test]
    fn cards_have_titles_and_lists() {
        for c in ENVIRONMENT_CARDS {
            assert!(!c.title.is_empty());
            assert_eq!(c.benefits.len(), 4);
        }
        for c in TIPS {
            assert!(!c.title.is_empty());
            assert_eq!(c.points.len(), 4);
        }
        for c in LAWS {
            assert!(!c.regulation.is_empty());
        }
    }

    #[test]
    fn every_law_carries_a_penalty() {
        assert!(LAWS.iter().all(|l| l.penalty.is_some()));
    }

    #[test]
    fn drunk_driving_law_matches_chat_reply_figures() {
        let law = LAWS.iter().find(|l| l.title == "Lái xe khi say rượu").unwrap();
        assert!(law.penalty.unwrap().contains("16-20 triệu"));
        assert!(law.regulation.contains("0,05%"));
    }

    #[test]
    fn image_caption_replaces_dashes() {
        assert_eq!(image_caption("car-inspection-checklist"), "car inspection checklist");
        assert_eq!(image_caption("a--b"), "a b");
        assert_eq!(image_caption(""), "");
    }
}
