//! Badge Catalog
//!
//! 8개 뱃지 × 5개 챌린지의 고정 카탈로그.
//! DB에 저장하지 않고 바이너리에 포함된 정적 데이터로 관리한다.
//!
//! # Interview Q&A
//!
//! Q: 카탈로그를 DB 테이블로 두지 않은 이유는?
//! A: 콘텐츠가 배포 단위로만 바뀜
//!    - 런타임 수정 요구 없음
//!    - 챌린지 ID가 진행도 테이블의 키로 쓰이므로 고정되어야 함
//!    - 조회 시 DB 왕복 없음
//!
//! Q: 챌린지 순서는 어떻게 표현하는가?
//! A: `challenges` 배열의 인덱스 + 1 = 순서 (ordinal position 1~5)

use serde::Serialize;

use crate::types::{BadgeId, ChallengeId, ChallengeType};

/// 뱃지당 챌린지 수
pub const CHALLENGES_PER_BADGE: usize = 5;

/// 카탈로그 뱃지
#[derive(Debug, Serialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// 순서대로 정렬된 챌린지 (index 0 = position 1)
    pub challenges: [Challenge; CHALLENGES_PER_BADGE],
}

/// 카탈로그 챌린지
#[derive(Debug, Serialize)]
pub struct Challenge {
    pub id: ChallengeId,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub title: &'static str,
    pub description: &'static str,
    /// 트레이너 상세 페이지 (일부 챌린지만 존재)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_path: Option<&'static str>,
}

impl Badge {
    /// 챌린지 총 개수 (진행률 분모)
    pub fn total_challenges(&self) -> usize {
        self.challenges.len()
    }

    /// 이 뱃지에 속한 챌린지 조회
    pub fn challenge(&self, challenge_id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == challenge_id)
    }

    /// 챌린지의 순서 (1부터 시작)
    pub fn position(&self, challenge_id: ChallengeId) -> Option<usize> {
        self.challenges
            .iter()
            .position(|c| c.id == challenge_id)
            .map(|idx| idx + 1)
    }

    /// 순서대로 정렬된 챌린지 ID 목록
    pub fn ordered_ids(&self) -> Vec<ChallengeId> {
        self.challenges.iter().map(|c| c.id).collect()
    }
}

/// 전체 뱃지 목록
pub fn all() -> &'static [Badge] {
    &BADGES
}

/// ID로 뱃지 조회
pub fn badge(id: BadgeId) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}

// ============ Catalog Data ============

const fn challenge(
    id: ChallengeId,
    kind: ChallengeType,
    title: &'static str,
    description: &'static str,
    trainer_path: Option<&'static str>,
) -> Challenge {
    Challenge { id, kind, title, description, trainer_path }
}

use ChallengeType::{Apply, Boss, Reflect, Roleplay, Study};

static BADGES: [Badge; 8] = [
    Badge {
        id: 1,
        name: "Stillness Badge",
        icon: "🧘",
        description: "Cultivate inner calm, mindfulness, and presence through meditation, prayer, and focused attention.",
        challenges: [
            challenge(1, Study, "Professor Oak: The Study Trainer",
                "Learning the principles of stillness and mindfulness. Study the benefits of reducing distractions and being present, and explore the concept of \"beginner's mind.\"",
                Some("/trainers/stillness/study")),
            challenge(2, Reflect, "Sabrina: The Reflect Trainer",
                "Journaling and reflecting on personal experiences with stillness. When did you feel truly present today? What distractions pull you away from the present moment?",
                Some("/trainers/stillness/reflect")),
            challenge(3, Roleplay, "Brock: The Microlearning Trainer",
                "Engaging in small, actionable practices of stillness. Practice mindful breathing for 5 minutes in silence, eat one meal mindfully, and take a short walk without distractions.",
                Some("/trainers/stillness/microlearning")),
            challenge(4, Apply, "Erika: The Deeper Practice Trainer",
                "Committing to a more significant period of stillness practice. Dedicate 15 minutes each day for two days to mindfulness or prayer and complete two 4-hour sessions without your phone.",
                Some("/trainers/stillness/deeper")),
            challenge(5, Boss, "Giovanni: The Stillness Gym Leader",
                "Integrating stillness into daily life over an extended period. Begin each day of one week with mindfulness practice and complete a 14-day social media fast, then reflect on how stillness affected your wellbeing.",
                Some("/trainers/stillness/master")),
        ],
    },
    Badge {
        id: 2,
        name: "Charity Badge",
        icon: "❤️",
        description: "Serve others selflessly with acts of kindness and generosity.",
        challenges: [
            challenge(6, Study, "Nurse Joy: Brother Hands",
                "\"Love without action is just a feeling.\" Study resources on charity and understanding: approaching others with empathy and listening before being heard.",
                Some("/trainers/charity/study")),
            challenge(7, Reflect, "Misty: Sister Grace",
                "\"Is your love conditional?\" Reflect on who you struggle to show charity toward and what prevents you from listening to understand.",
                Some("/trainers/charity/reflect")),
            challenge(8, Roleplay, "Officer Jenny: Elder Basket",
                "\"Charity is not just for those who deserve it.\" Ask someone you disagree with to explain their perspective, and ask five questions before sharing your opinion.",
                Some("/trainers/charity/practice")),
            challenge(9, Apply, "Lt. Surge: Captain Heart",
                "\"Service is love in uniform.\" Go a day without contentious speech, find three things to admire in someone with different beliefs, and perform anonymous acts of service.",
                Some("/trainers/charity/apply")),
            challenge(10, Boss, "Cynthia: The Hidden Saint Gym Leader",
                "\"You'll know me not by name, but by the love you gave others.\" Commit to a 7-day contention fast, keep a charity journal, and implement a peacemaker plan.",
                Some("/trainers/charity/master")),
        ],
    },
    Badge {
        id: 3,
        name: "Virtue Badge",
        icon: "⭐",
        description: "Develop moral character through daily practice of virtuous actions.",
        challenges: [
            challenge(11, Study, "Lance: Sir Honor",
                "\"True strength begins in unseen choices.\" Read a short piece on virtue. Define what virtue means to you.", None),
            challenge(12, Reflect, "Lorelei: Lady Truth",
                "\"Where in your life are you wearing masks?\" Reflect on your small dishonesties or moments you avoid truth.", None),
            challenge(13, Roleplay, "Bruno: Brother Flint",
                "\"The furnace of pressure reveals the shape of your character.\" Imagine facing a moral test, then journal how you would respond.", None),
            challenge(14, Apply, "Agatha: Sister Laurel",
                "\"Speak with love. But speak.\" Live 3 days of high-integrity actions. Do what you say you will.", None),
            challenge(15, Boss, "Steven: Judge Valor Gym Leader",
                "\"Only you know if you've been true.\" Face a real-life scenario where you must speak or act with integrity.", None),
        ],
    },
    Badge {
        id: 4,
        name: "Courage Badge",
        icon: "🦁",
        description: "Face your fears and stand for truth even when it's difficult.",
        challenges: [
            challenge(16, Study, "Koga: Scout Blaze",
                "\"Fear screams. Courage whispers back.\" Read or watch a short story about spiritual courage. Define your fears.", None),
            challenge(17, Reflect, "Janine: Sister Flare",
                "\"What's the truth you're afraid to live out loud?\" Reflect on what you're avoiding due to fear.", None),
            challenge(18, Roleplay, "Blue: Brother Roar",
                "\"Even lions shake sometimes. But they still roar.\" Write a scenario where you act courageously.", None),
            challenge(19, Apply, "Red: Elder Torch",
                "\"Light the way, even if your voice shakes.\" Do 3 things that scare you a little (vulnerability, honesty, risk).", None),
            challenge(20, Boss, "Wallace: Captain Valor Gym Leader",
                "\"Will you stand, even when no one else is?\" Face one real-world fear (conversation, confrontation, or risk).", None),
        ],
    },
    Badge {
        id: 5,
        name: "Discipline Badge",
        icon: "⏰",
        description: "Build self-control and resilience through consistent habits.",
        challenges: [
            challenge(21, Study, "Chuck: Coach Steel",
                "\"Motivation gets you started. Discipline gets you there.\" Study a short piece on building discipline. Write a habit you want to build.", None),
            challenge(22, Reflect, "Whitney: Sister Rhythm",
                "\"Where are you ruled by impulse?\" Reflect on your triggers and what habits derail you.", None),
            challenge(23, Roleplay, "Morty: Brother Grit",
                "\"Discipline means showing up. Especially when you don't want to.\" Roleplay a difficult morning where you stay committed.", None),
            challenge(24, Apply, "Jasmine: Elder Lockstep",
                "\"Repetition is your revolution.\" Do one habit for 5 days straight. Track and reflect.", None),
            challenge(25, Boss, "Falkner: General Echo Gym Leader",
                "\"The world won't change until you do.\" Complete 10 days of the habit. Submit a final summary of growth.", None),
        ],
    },
    Badge {
        id: 6,
        name: "Gratitude Badge",
        icon: "🙏",
        description: "Cultivate a thankful heart in all circumstances.",
        challenges: [
            challenge(26, Study, "Blaine: Sister Ember",
                "\"Gratitude reframes every moment.\" Read or watch content on the power of gratitude. Define what you're most thankful for.", None),
            challenge(27, Reflect, "Gardenia: Brother Roots",
                "\"You're already living someone's dream.\" Reflect on what you take for granted. Write about it.", None),
            challenge(28, Roleplay, "Fantina: Sister Song",
                "\"Even in pain, there is praise.\" Roleplay expressing gratitude in a hard moment.", None),
            challenge(29, Apply, "Candice: The Collector",
                "\"Every moment is a gift. Collect them.\" Write 3 thank-you messages. Log gratitude daily for 3 days.", None),
            challenge(30, Boss, "Volkner: The Thankful One Gym Leader",
                "\"Can you be grateful when the blessings hide?\" Show gratitude during hardship. Journal the story.", None),
        ],
    },
    Badge {
        id: 7,
        name: "Purpose Badge",
        icon: "🌱",
        description: "Discover and pursue your unique mission and calling.",
        challenges: [
            challenge(31, Study, "Bugsy: The Seeker",
                "\"The path begins with a question.\" Study purpose and meaning. Read content on faith and life mission.", None),
            challenge(32, Reflect, "Maylene: The Pilgrim",
                "\"Every journey is a mirror.\" Reflect on your life story so far. What patterns emerge? What gives you meaning?", None),
            challenge(33, Roleplay, "Flannery: The Cartographer",
                "\"Your path will be your own.\" Write out a possible purpose statement. Practice introducing yourself with it.", None),
            challenge(34, Apply, "Winona: The Wayfinder",
                "\"Live as if every day reveals your purpose.\" Conduct 3 experiments in living more purposefully. Seek meaning.", None),
            challenge(35, Boss, "Clair: The Oracle Gym Leader",
                "\"Your purpose is both found and created.\" Write your purpose statement after all your explorations. Share it.", None),
        ],
    },
    Badge {
        id: 8,
        name: "Service Badge",
        icon: "💪",
        description: "Integrate all virtues to become your best self and guide others.",
        challenges: [
            challenge(36, Study, "Pryce: The Volunteer",
                "\"Service reveals your gifts.\" Learn about different forms of service. Study the concept of ministry.", None),
            challenge(37, Reflect, "Roxanne: The Giver",
                "\"What parts of service scare you?\" Reflect on your barriers to service. Consider what it means to \"wash feet.\"", None),
            challenge(38, Roleplay, "Brawly: The Server",
                "\"Practice the art of seeing needs.\" Brainstorm 10 ways you could serve others in your normal life routines.", None),
            challenge(39, Apply, "Wattson: The Minister",
                "\"To serve is to lead.\" Complete 3 acts of service for people you know: one for family, one for a friend, one for someone in need.", None),
            challenge(40, Boss, "Alder: The Servant Leader Gym Leader",
                "\"The greatest among you will be your servant.\" Design and execute a service project that addresses a real need.", None),
        ],
    },
];
