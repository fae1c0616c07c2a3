//! Built-in recommended questions per category.
//!
//! The sidebar shows a random subset of these; `shuffle` picks the subset.

use enum_map::EnumMap;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::session::Category;

/// Recommended questions shown per category.
pub const PICKS_PER_CATEGORY: usize = 4;

/// A canned question with a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub question: &'static str,
    pub description: &'static str,
}

const fn rec(question: &'static str, description: &'static str) -> Recommendation {
    Recommendation {
        question,
        description,
    }
}

const HEALTH: &[Recommendation] = &[
    rec("혈압 관리 방법 알려주세요", "중장년층 건강 관리"),
    rec("당뇨 예방은 어떻게 하나요?", "성인병 예방법"),
    rec("건강한 운동법이 궁금해요", "중장년층 맞춤 운동"),
    rec("건강검진 주기는 어떻게 되나요?", "정기 건강검진"),
    rec("콜레스테롤 관리법 알려주세요", "혈관 건강"),
    rec("골다공증 예방 방법은?", "뼈 건강"),
    rec("스트레스 관리 방법", "정신 건강"),
    rec("수면의 질 개선 방법", "수면 건강"),
];

const TRAVEL: &[Recommendation] = &[
    rec("제주도 여행 추천해주세요", "인기 여행지"),
    rec("부산 여행 코스 알려주세요", "바다 여행"),
    rec("경주 역사 여행 계획 세워주세요", "문화재 탐방"),
    rec("여행 준비물은 뭐가 필요한가요?", "여행 팁"),
    rec("강릉 여행 코스 추천해주세요", "동해안 여행"),
    rec("전주 한옥마을 여행 계획", "전통 문화"),
    rec("여행자 보험 가입 방법", "여행 준비"),
    rec("온천 여행지 추천해주세요", "힐링 여행"),
];

const INVESTMENT: &[Recommendation] = &[
    rec("안전한 투자 방법은?", "저위험 투자"),
    rec("연금 준비 어떻게 하나요?", "은퇴 계획"),
    rec("부동산 투자 주의사항은?", "부동산 투자"),
    rec("적금과 예금 어떤게 좋을까요?", "기본 금융상품"),
    rec("국채 투자 방법 알려주세요", "안전 투자"),
    rec("펀드 투자 기초 지식", "간접 투자"),
    rec("ISA 계좌란 무엇인가요?", "세제혜택 상품"),
    rec("퇴직연금 관리 방법", "퇴직 준비"),
];

const LEGAL: &[Recommendation] = &[
    rec("계약서 작성시 주의사항", "계약 법률"),
    rec("상속 준비 방법", "상속 법률"),
    rec("사기 예방법 알려주세요", "소비자 보호"),
    rec("유언장 작성 방법", "상속 준비"),
    rec("임대차 계약 주의사항", "부동산 법률"),
    rec("소비자 분쟁 해결 방법", "소비자 권익"),
    rec("의료사고 대처 방법", "의료 법률"),
    rec("노인장기요양보험 신청법", "복지 혜택"),
];

/// Full catalog for a category.
pub fn catalog(category: Category) -> &'static [Recommendation] {
    match category {
        Category::Health => HEALTH,
        Category::Travel => TRAVEL,
        Category::Investment => INVESTMENT,
        Category::Legal => LEGAL,
    }
}

/// The first picks of every category, in catalog order.
pub fn default_picks() -> EnumMap<Category, Vec<Recommendation>> {
    EnumMap::from_fn(|category| {
        catalog(category)
            .iter()
            .take(PICKS_PER_CATEGORY)
            .copied()
            .collect()
    })
}

/// Picks a random subset of each category's catalog.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R) -> EnumMap<Category, Vec<Recommendation>> {
    EnumMap::from_fn(|category| {
        catalog(category)
            .choose_multiple(rng, PICKS_PER_CATEGORY)
            .copied()
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_every_category_has_a_full_catalog() {
        for category in Category::ALL {
            assert_eq!(catalog(category).len(), 8);
        }
    }

    #[test]
    fn test_shuffle_picks_distinct_questions_from_own_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks = shuffle(&mut rng);

        for category in Category::ALL {
            let chosen = &picks[category];
            assert_eq!(chosen.len(), PICKS_PER_CATEGORY);
            for pick in chosen {
                assert!(catalog(category).contains(pick));
            }
            let mut questions: Vec<_> = chosen.iter().map(|r| r.question).collect();
            questions.sort_unstable();
            questions.dedup();
            assert_eq!(questions.len(), PICKS_PER_CATEGORY);
        }
    }

    #[test]
    fn test_default_picks_are_catalog_prefix() {
        let picks = default_picks();
        assert_eq!(picks[Category::Health][0].question, "혈압 관리 방법 알려주세요");
        assert_eq!(picks[Category::Legal].len(), PICKS_PER_CATEGORY);
    }
}
