use crate::core::{Card, EquityError, Hand, parse_cards};

/// A fixed equity problem used for measuring the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Short name used in reports.
    pub tag: &'static str,
    pub hero: Hand,
    pub opponents: Vec<Hand>,
    pub known_board: Vec<Card>,
    /// Added to the base seed so each scenario draws its own streams.
    pub seed_offset: u64,
}

/// tag, hero, opponents, board, seed offset
const SCENARIOS: [(&str, &str, &[&str], &str, u64); 3] = [
    ("S1_AKs_vs_QQ_preflop", "ASKS", &["QDQC"], "", 0),
    ("S2_AKs_vs_QQ_vs_78c_preflop", "ASKS", &["QDQC", "7C8C"], "", 1000),
    ("S3_postflop_known_flop", "ASKS", &["QDQC"], "QH 2S 9D", 2000),
];

impl Scenario {
    fn parse(
        tag: &'static str,
        hero: &str,
        opponents: &[&str],
        board: &str,
        seed_offset: u64,
    ) -> Result<Self, EquityError> {
        Ok(Self {
            tag,
            hero: Hand::new_from_str(hero)?,
            opponents: opponents
                .iter()
                .map(|s| Hand::new_from_str(s))
                .collect::<Result<_, _>>()?,
            known_board: parse_cards(board)?,
            seed_offset,
        })
    }

    /// The three reference scenarios: heads-up preflop, three handed
    /// preflop, and heads-up on a known flop.
    pub fn all() -> Result<Vec<Self>, EquityError> {
        SCENARIOS
            .iter()
            .map(|&(tag, hero, opponents, board, offset)| {
                Self::parse(tag, hero, opponents, board, offset)
            })
            .collect()
    }

    /// Look a scenario up by tag, or by its `S1`/`S2`/`S3` prefix.
    pub fn find(name: &str) -> Result<Option<Self>, EquityError> {
        let name = name.to_ascii_uppercase();
        Ok(Self::all()?.into_iter().find(|s| {
            s.tag.eq_ignore_ascii_case(&name) || s.tag.split('_').next() == Some(name.as_str())
        }))
    }
}
