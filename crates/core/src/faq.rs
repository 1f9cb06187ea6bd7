//! HR question catalogue

/// Placeholder answer of a question the agent has not answered yet
pub const PENDING_ANSWER: &str = "正在處理您的問題...";

/// Answer recorded when a question could not be handed to the agent
pub const ERROR_ANSWER: &str = "抱歉，處理您的問題時發生錯誤。請稍後再試。";

/// Category of questions that match nothing in the catalogue
pub const GENERAL_CATEGORY: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: [&'static str; 3],
    pub keywords: [&'static str; 4],
}

pub const BENEFITS: QuestionCategory = QuestionCategory {
    id: "benefits",
    title: "福利相關",
    questions: [
        "我的年假還剩多少天？",
        "公司的健康保險包含哪些項目？",
        "退休金計劃是如何運作的？",
    ],
    keywords: ["年假", "保險", "退休金", "福利"],
};

pub const POLICIES: QuestionCategory = QuestionCategory {
    id: "policies",
    title: "政策規定",
    questions: [
        "遠距工作的政策是什麼？",
        "請假流程該如何進行？",
        "加班費是如何計算的？",
    ],
    keywords: ["遠距", "請假", "加班", "政策"],
};

pub const CAREER: QuestionCategory = QuestionCategory {
    id: "career",
    title: "職涯發展",
    questions: [
        "如何申請內部轉職？",
        "公司有哪些培訓課程？",
        "績效評估的標準是什麼？",
    ],
    keywords: ["轉職", "培訓", "績效", "發展"],
};

/// Categories in matching order
pub const CATEGORIES: [QuestionCategory; 3] = [BENEFITS, POLICIES, CAREER];

/// Questions offered on the greeting screen
pub const fn greeting_questions() -> [&'static str; 3] {
    [
        BENEFITS.questions[0],
        BENEFITS.questions[1],
        POLICIES.questions[0],
    ]
}

impl QuestionCategory {
    fn matches(&self, question: &str) -> bool {
        self.questions.contains(&question) || self.keywords.iter().any(|k| question.contains(k))
    }
}

/// Category id of a question, `general` when nothing matches
pub fn determine_category(question: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|category| category.matches(question))
        .map_or(GENERAL_CATEGORY, |category| category.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_questions_map_to_their_category() {
        for category in CATEGORIES {
            for question in category.questions {
                assert_eq!(determine_category(question), category.id);
            }
        }
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(determine_category("我想問加班的規定"), "policies");
        assert_eq!(determine_category("有沒有新的培訓"), "career");
    }

    #[test]
    fn test_first_matching_category_wins() {
        // 福利 (benefits) and 政策 (policies) both occur
        assert_eq!(determine_category("福利政策"), "benefits");
    }

    #[test]
    fn test_unmatched_question_is_general() {
        assert_eq!(determine_category("What's for lunch?"), GENERAL_CATEGORY);
    }

    #[test]
    fn test_greeting_questions() {
        assert_eq!(
            greeting_questions(),
            [
                "我的年假還剩多少天？",
                "公司的健康保險包含哪些項目？",
                "遠距工作的政策是什麼？"
            ]
        );
    }
}
