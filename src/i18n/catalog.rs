//! Message tables for the deck reply.

use super::pluralize;
use crate::model::{
    card::{CardType, ExtraType},
    deck::Section,
    locale::Locale,
};

/// Placeholder replaced by the type breakdown in section titles.
const DETAIL_PLACEHOLDER: &str = "{detail}";

/// Singular and plural templates of one message.
type Plural = (&'static str, &'static str);

struct Messages {
    your_deck: &'static str,
    deck_empty: &'static str,
    main_title: Plural,
    extra_title: Plural,
    side_title: Plural,
    main_continued: &'static str,
    extra_continued: &'static str,
    side_continued: &'static str,
    monster: Plural,
    spell: Plural,
    trap: Plural,
    fusion: &'static str,
    synchro: &'static str,
    xyz: &'static str,
    link: &'static str,
    separator: &'static str,
}

static EN: Messages = Messages {
    your_deck: "Your Deck",
    deck_empty: "Error: Your deck is empty.",
    main_title: ("Main Deck ({n} card — {detail})", "Main Deck ({n} cards — {detail})"),
    extra_title: ("Extra Deck ({n} card — {detail})", "Extra Deck ({n} cards — {detail})"),
    side_title: ("Side Deck ({n} card — {detail})", "Side Deck ({n} cards — {detail})"),
    main_continued: "Main Deck (continued)",
    extra_continued: "Extra Deck (continued)",
    side_continued: "Side Deck (continued)",
    monster: ("{n} Monster", "{n} Monsters"),
    spell: ("{n} Spell", "{n} Spells"),
    trap: ("{n} Trap", "{n} Traps"),
    fusion: "Fusion",
    synchro: "Synchro",
    xyz: "Xyz",
    link: "Link",
    separator: ", ",
};

static DE: Messages = Messages {
    your_deck: "Dein Deck",
    deck_empty: "Fehler: Dein Deck ist leer.",
    main_title: ("Main Deck ({n} Karte — {detail})", "Main Deck ({n} Karten — {detail})"),
    extra_title: ("Extra Deck ({n} Karte — {detail})", "Extra Deck ({n} Karten — {detail})"),
    side_title: ("Side Deck ({n} Karte — {detail})", "Side Deck ({n} Karten — {detail})"),
    main_continued: "Main Deck (Fortsetzung)",
    extra_continued: "Extra Deck (Fortsetzung)",
    side_continued: "Side Deck (Fortsetzung)",
    monster: ("{n} Monster", "{n} Monster"),
    spell: ("{n} Zauber", "{n} Zauber"),
    trap: ("{n} Falle", "{n} Fallen"),
    fusion: "Fusion",
    synchro: "Synchro",
    xyz: "Xyz",
    link: "Link",
    separator: ", ",
};

static ES: Messages = Messages {
    your_deck: "Tu Deck",
    deck_empty: "Error: tu Deck está vacío.",
    main_title: (
        "Deck Principal ({n} carta — {detail})",
        "Deck Principal ({n} cartas — {detail})",
    ),
    extra_title: ("Deck Extra ({n} carta — {detail})", "Deck Extra ({n} cartas — {detail})"),
    side_title: (
        "Deck Auxiliar ({n} carta — {detail})",
        "Deck Auxiliar ({n} cartas — {detail})",
    ),
    main_continued: "Deck Principal (continuación)",
    extra_continued: "Deck Extra (continuación)",
    side_continued: "Deck Auxiliar (continuación)",
    monster: ("{n} Monstruo", "{n} Monstruos"),
    spell: ("{n} Mágica", "{n} Mágicas"),
    trap: ("{n} Trampa", "{n} Trampas"),
    fusion: "Fusión",
    synchro: "Sincronía",
    xyz: "Xyz",
    link: "Enlace",
    separator: ", ",
};

static FR: Messages = Messages {
    your_deck: "Votre Deck",
    deck_empty: "Erreur : votre Deck est vide.",
    main_title: ("Main Deck ({n} carte — {detail})", "Main Deck ({n} cartes — {detail})"),
    extra_title: ("Extra Deck ({n} carte — {detail})", "Extra Deck ({n} cartes — {detail})"),
    side_title: ("Side Deck ({n} carte — {detail})", "Side Deck ({n} cartes — {detail})"),
    main_continued: "Main Deck (suite)",
    extra_continued: "Extra Deck (suite)",
    side_continued: "Side Deck (suite)",
    monster: ("{n} Monstre", "{n} Monstres"),
    spell: ("{n} Magie", "{n} Magies"),
    trap: ("{n} Piège", "{n} Pièges"),
    fusion: "Fusion",
    synchro: "Synchro",
    xyz: "Xyz",
    link: "Lien",
    separator: ", ",
};

static IT: Messages = Messages {
    your_deck: "Il tuo Deck",
    deck_empty: "Errore: il tuo Deck è vuoto.",
    main_title: (
        "Deck Principale ({n} carta — {detail})",
        "Deck Principale ({n} carte — {detail})",
    ),
    extra_title: ("Extra Deck ({n} carta — {detail})", "Extra Deck ({n} carte — {detail})"),
    side_title: ("Side Deck ({n} carta — {detail})", "Side Deck ({n} carte — {detail})"),
    main_continued: "Deck Principale (continua)",
    extra_continued: "Extra Deck (continua)",
    side_continued: "Side Deck (continua)",
    monster: ("{n} Mostro", "{n} Mostri"),
    spell: ("{n} Magia", "{n} Magie"),
    trap: ("{n} Trappola", "{n} Trappole"),
    fusion: "Fusione",
    synchro: "Synchro",
    xyz: "Xyz",
    link: "Link",
    separator: ", ",
};

static PT: Messages = Messages {
    your_deck: "Seu Deck",
    deck_empty: "Erro: seu Deck está vazio.",
    main_title: (
        "Deck Principal ({n} carta — {detail})",
        "Deck Principal ({n} cartas — {detail})",
    ),
    extra_title: (
        "Deck Adicional ({n} carta — {detail})",
        "Deck Adicional ({n} cartas — {detail})",
    ),
    side_title: (
        "Deck Lateral ({n} carta — {detail})",
        "Deck Lateral ({n} cartas — {detail})",
    ),
    main_continued: "Deck Principal (continuação)",
    extra_continued: "Deck Adicional (continuação)",
    side_continued: "Deck Lateral (continuação)",
    monster: ("{n} Monstro", "{n} Monstros"),
    spell: ("{n} Magia", "{n} Magias"),
    trap: ("{n} Armadilha", "{n} Armadilhas"),
    fusion: "Fusão",
    synchro: "Sincro",
    xyz: "Xyz",
    link: "Link",
    separator: ", ",
};

static JA: Messages = Messages {
    your_deck: "あなたのデッキ",
    deck_empty: "エラー：デッキが空です。",
    main_title: ("メインデッキ（{n}枚 — {detail}）", "メインデッキ（{n}枚 — {detail}）"),
    extra_title: ("エクストラデッキ（{n}枚 — {detail}）", "エクストラデッキ（{n}枚 — {detail}）"),
    side_title: ("サイドデッキ（{n}枚 — {detail}）", "サイドデッキ（{n}枚 — {detail}）"),
    main_continued: "メインデッキ（続き）",
    extra_continued: "エクストラデッキ（続き）",
    side_continued: "サイドデッキ（続き）",
    monster: ("モンスター{n}枚", "モンスター{n}枚"),
    spell: ("魔法{n}枚", "魔法{n}枚"),
    trap: ("罠{n}枚", "罠{n}枚"),
    fusion: "融合",
    synchro: "シンクロ",
    xyz: "エクシーズ",
    link: "リンク",
    separator: "、",
};

static KO: Messages = Messages {
    your_deck: "당신의 덱",
    deck_empty: "오류: 덱이 비어 있습니다.",
    main_title: ("메인 덱 ({n}장 — {detail})", "메인 덱 ({n}장 — {detail})"),
    extra_title: ("엑스트라 덱 ({n}장 — {detail})", "엑스트라 덱 ({n}장 — {detail})"),
    side_title: ("사이드 덱 ({n}장 — {detail})", "사이드 덱 ({n}장 — {detail})"),
    main_continued: "메인 덱 (계속)",
    extra_continued: "엑스트라 덱 (계속)",
    side_continued: "사이드 덱 (계속)",
    monster: ("몬스터 {n}장", "몬스터 {n}장"),
    spell: ("마법 {n}장", "마법 {n}장"),
    trap: ("함정 {n}장", "함정 {n}장"),
    fusion: "융합",
    synchro: "싱크로",
    xyz: "엑시즈",
    link: "링크",
    separator: ", ",
};

static ZH_CN: Messages = Messages {
    your_deck: "你的卡组",
    deck_empty: "错误：你的卡组是空的。",
    main_title: ("主卡组（{n}张 — {detail}）", "主卡组（{n}张 — {detail}）"),
    extra_title: ("额外卡组（{n}张 — {detail}）", "额外卡组（{n}张 — {detail}）"),
    side_title: ("副卡组（{n}张 — {detail}）", "副卡组（{n}张 — {detail}）"),
    main_continued: "主卡组（续）",
    extra_continued: "额外卡组（续）",
    side_continued: "副卡组（续）",
    monster: ("怪兽{n}张", "怪兽{n}张"),
    spell: ("魔法{n}张", "魔法{n}张"),
    trap: ("陷阱{n}张", "陷阱{n}张"),
    fusion: "融合",
    synchro: "同调",
    xyz: "超量",
    link: "连接",
    separator: "，",
};

static ZH_TW: Messages = Messages {
    your_deck: "你的牌組",
    deck_empty: "錯誤：你的牌組是空的。",
    main_title: ("主牌組（{n}張 — {detail}）", "主牌組（{n}張 — {detail}）"),
    extra_title: ("額外牌組（{n}張 — {detail}）", "額外牌組（{n}張 — {detail}）"),
    side_title: ("副牌組（{n}張 — {detail}）", "副牌組（{n}張 — {detail}）"),
    main_continued: "主牌組（續）",
    extra_continued: "額外牌組（續）",
    side_continued: "副牌組（續）",
    monster: ("怪獸{n}張", "怪獸{n}張"),
    spell: ("魔法{n}張", "魔法{n}張"),
    trap: ("陷阱{n}張", "陷阱{n}張"),
    fusion: "融合",
    synchro: "同步",
    xyz: "超量",
    link: "連結",
    separator: "，",
};

/// Localized messages bound to one display locale.
#[derive(Clone, Copy)]
pub struct Catalog {
    locale: Locale,
    messages: &'static Messages,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        let messages = match locale {
            Locale::En => &EN,
            Locale::De => &DE,
            Locale::Es => &ES,
            Locale::Fr => &FR,
            Locale::It => &IT,
            Locale::Pt => &PT,
            Locale::Ja => &JA,
            Locale::Ko => &KO,
            Locale::ZhCn => &ZH_CN,
            Locale::ZhTw => &ZH_TW,
        };
        Self { locale, messages }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Embed title of the deck reply.
    pub fn your_deck(&self) -> &'static str {
        self.messages.your_deck
    }

    pub fn deck_empty(&self) -> &'static str {
        self.messages.deck_empty
    }

    /// Title of the first field of a section, e.g.
    /// `Main Deck (40 cards — 20 Monsters, 20 Spells)`.
    pub fn section_title(&self, section: Section, count: usize, detail: &str) -> String {
        let (singular, plural) = match section {
            Section::Main => self.messages.main_title,
            Section::Extra => self.messages.extra_title,
            Section::Side => self.messages.side_title,
        };
        pluralize(count, self.locale, singular, plural).replace(DETAIL_PLACEHOLDER, detail)
    }

    /// Title of the overflow fields of a section.
    pub fn section_continued(&self, section: Section) -> &'static str {
        match section {
            Section::Main => self.messages.main_continued,
            Section::Extra => self.messages.extra_continued,
            Section::Side => self.messages.side_continued,
        }
    }

    /// Counted coarse type phrase, e.g. `3 Monsters`.
    pub fn card_type(&self, card_type: CardType, count: usize) -> String {
        let (singular, plural) = match card_type {
            CardType::Monster => self.messages.monster,
            CardType::Spell => self.messages.spell,
            CardType::Trap => self.messages.trap,
        };
        pluralize(count, self.locale, singular, plural)
    }

    pub fn extra_type(&self, extra_type: ExtraType) -> &'static str {
        match extra_type {
            ExtraType::Fusion => self.messages.fusion,
            ExtraType::Synchro => self.messages.synchro,
            ExtraType::Xyz => self.messages.xyz,
            ExtraType::Link => self.messages.link,
        }
    }

    /// Joins breakdown phrases with the locale's list connective.
    pub fn join(&self, parts: &[String]) -> String {
        parts.join(self.messages.separator)
    }
}
