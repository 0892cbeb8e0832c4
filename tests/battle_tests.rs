//! End-to-end battle tests.
//!
//! These drive whole turns and whole battles through the public API the way
//! a host would: build sides, submit actions, read outcomes and events.

use creature_battle::core::{
    Action, BattleConfig, Control, Creature, CreatureId, Element, Side, SideId, Skill, Stats,
};
use creature_battle::battle::{Battle, BattleEvent, Controller, FirstEligible};
use creature_battle::rules::BattleOutcome;

const HIT: Action = Action::Attack { skill: 0 };

fn fighter(id: u32, element: Element, hp: u32, attack: u32, speed: u32) -> Creature {
    let stats = Stats {
        max_hp: 100,
        attack,
        defense: 0,
        sp_attack: 10,
        sp_defense: 10,
        speed,
    };
    Creature::new(CreatureId::new(id), format!("fighter-{}", id), element, stats)
        .with_skill(Skill::physical("Strike", Element::Normal, 0))
        .with_hp(hp)
}

fn side(id: SideId, party: Vec<Creature>) -> Side {
    Side::new(id, format!("{}", id), Control::Bot, party).unwrap()
}

fn count_attacks(events: &[BattleEvent], by: SideId) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, BattleEvent::AttackPerformed { side, .. } if *side == by))
        .count()
}

/// Attacks every turn with its first skill and sends in the first creature left.
struct AlwaysAttack;

impl Controller for AlwaysAttack {
    fn choose_action(&mut self, _side: SideId, _battle: &Battle) -> Action {
        HIT
    }
}

/// Plays a fixed script of actions, then attacks.
struct Scripted {
    actions: Vec<Action>,
    replacements: Vec<usize>,
}

impl Controller for Scripted {
    fn choose_action(&mut self, _side: SideId, _battle: &Battle) -> Action {
        if self.actions.is_empty() {
            HIT
        } else {
            self.actions.remove(0)
        }
    }

    fn choose_replacement(&mut self, _side: &Side, eligible: &[usize]) -> usize {
        if self.replacements.is_empty() {
            eligible[0]
        } else {
            self.replacements.remove(0)
        }
    }
}

/// Side B's last creature at 1 hp is knocked out by the faster Side A, so
/// B's queued attack never happens.
#[test]
fn test_last_creature_knockout_skips_second_attack() {
    let a = side(SideId::A, vec![fighter(1, Element::Normal, 100, 5, 20)]);
    let b = side(
        SideId::B,
        vec![fighter(2, Element::Normal, 1, 50, 1), fighter(3, Element::Normal, 0, 50, 1)],
    );
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();

    let outcome = battle.resolve_turn(HIT, HIT, &mut FirstEligible).unwrap();

    assert_eq!(outcome, BattleOutcome::Loss(SideId::B));
    assert_eq!(outcome.winner(), Some(SideId::A));

    let events = battle.events();
    assert_eq!(count_attacks(events, SideId::A), 1);
    assert_eq!(count_attacks(events, SideId::B), 0);
    assert_eq!(battle.side(SideId::A).active().unwrap().hp(), 100);
    assert_eq!(battle.side(SideId::B).active_slot(), None);
    assert!(matches!(
        events.last(),
        Some(BattleEvent::BattleEnded { outcome: BattleOutcome::Loss(SideId::B) })
    ));
}

/// A swap resolves before an attack even when the attacker is much faster.
#[test]
fn test_swap_precedes_faster_attack() {
    let a = side(
        SideId::A,
        vec![fighter(1, Element::Normal, 100, 5, 1), fighter(2, Element::Normal, 100, 5, 1)],
    );
    let b = side(SideId::B, vec![fighter(3, Element::Normal, 100, 12, 200)]);
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();

    battle
        .resolve_turn(Action::Swap { target: 1 }, HIT, &mut FirstEligible)
        .unwrap();

    let events = battle.drain_events();
    let swap_at = events
        .iter()
        .position(|e| matches!(e, BattleEvent::SwapPerformed { forced: false, .. }))
        .unwrap();
    let attack_at = events
        .iter()
        .position(|e| matches!(e, BattleEvent::AttackPerformed { .. }))
        .unwrap();
    assert!(swap_at < attack_at);

    let a = battle.side(SideId::A);
    assert_eq!(a.creature(0).unwrap().hp(), 100);
    assert_eq!(a.creature(1).unwrap().hp(), 88);
}

/// Both sides swapping deals no damage and both swaps land.
#[test]
fn test_double_swap() {
    let a = side(
        SideId::A,
        vec![fighter(1, Element::Fire, 100, 5, 1), fighter(2, Element::Water, 100, 5, 1)],
    );
    let b = side(
        SideId::B,
        vec![fighter(3, Element::Leaf, 100, 5, 1), fighter(4, Element::Normal, 100, 5, 1)],
    );
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();

    let outcome = battle
        .resolve_turn(Action::Swap { target: 1 }, Action::Swap { target: 1 }, &mut FirstEligible)
        .unwrap();

    assert_eq!(outcome, BattleOutcome::Ongoing);
    assert_eq!(battle.side(SideId::A).active().unwrap().id, CreatureId::new(2));
    assert_eq!(battle.side(SideId::B).active().unwrap().id, CreatureId::new(4));
    for side in SideId::BOTH {
        assert!(battle.side(side).party().iter().all(|c| c.hp() == 100));
    }
}

/// Knockout mid-turn triggers a forced swap chosen by the fainted side's
/// controller, and the battle continues.
#[test]
fn test_forced_swap_uses_controller_choice() {
    let a = side(SideId::A, vec![fighter(1, Element::Normal, 100, 30, 10)]);
    let b = side(
        SideId::B,
        vec![
            fighter(2, Element::Normal, 10, 1, 1),
            fighter(3, Element::Normal, 100, 1, 1),
            fighter(4, Element::Normal, 100, 1, 1),
        ],
    );
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();

    let mut red = AlwaysAttack;
    let mut blue = Scripted {
        actions: vec![],
        replacements: vec![2],
    };
    let outcome = battle.play_turn(&mut red, &mut blue).unwrap();

    assert_eq!(outcome, BattleOutcome::Ongoing);
    let b = battle.side(SideId::B);
    assert_eq!(b.active_slot(), Some(2));
    assert!(b.creature(0).unwrap().is_fainted());

    // The replacement carried out the queued attack.
    assert_eq!(battle.side(SideId::A).active().unwrap().hp(), 99);

    let forced: Vec<_> = battle
        .events()
        .iter()
        .filter(|e| matches!(e, BattleEvent::SwapPerformed { forced: true, .. }))
        .collect();
    assert_eq!(forced.len(), 1);
}

/// Element advantage decides a battle between otherwise identical parties.
#[test]
fn test_type_advantage_wins_full_battle() {
    let make = |id: u32, element: Element| {
        Creature::new(CreatureId::new(id), format!("m{}", id), element, Stats::uniform(20))
            .with_skill(Skill::special("Burst", element, 5))
    };
    let a = side(SideId::A, vec![make(1, Element::Water), make(2, Element::Water)]);
    let b = side(SideId::B, vec![make(3, Element::Fire), make(4, Element::Fire)]);
    let mut battle = Battle::new(BattleConfig::default().with_seed(5), a, b).unwrap();

    let outcome = battle.run(&mut AlwaysAttack, &mut AlwaysAttack).unwrap();

    assert_eq!(outcome, BattleOutcome::Loss(SideId::B));
    assert_eq!(outcome.for_side(SideId::A), BattleOutcome::Win(SideId::A));
    assert!(battle.side(SideId::B).is_defeated());
    assert!(!battle.side(SideId::A).is_defeated());
}

/// Identical seeds and inputs replay to identical battles.
#[test]
fn test_deterministic_replay() {
    let build = || {
        let a = side(
            SideId::A,
            vec![fighter(1, Element::Normal, 100, 9, 7), fighter(2, Element::Leaf, 100, 9, 7)],
        );
        let b = side(
            SideId::B,
            vec![fighter(3, Element::Normal, 100, 9, 7), fighter(4, Element::Fire, 100, 9, 7)],
        );
        Battle::new(BattleConfig::default().with_seed(1234), a, b).unwrap()
    };

    let mut first = build();
    let mut second = build();
    let outcome1 = first.run(&mut AlwaysAttack, &mut AlwaysAttack).unwrap();
    let outcome2 = second.run(&mut AlwaysAttack, &mut AlwaysAttack).unwrap();

    assert!(outcome1.is_terminal());
    assert_eq!(outcome1, outcome2);
    assert_eq!(first.turn(), second.turn());
    assert_eq!(first.drain_events(), second.drain_events());
}

/// `run` stops at the turn cap without ending the battle.
#[test]
fn test_run_respects_turn_limit() {
    let a = side(SideId::A, vec![fighter(1, Element::Normal, 100, 0, 1)]);
    let b = side(SideId::B, vec![fighter(2, Element::Normal, 100, 0, 1)]);
    let mut battle = Battle::new(BattleConfig::default().with_max_turns(10), a, b).unwrap();

    let outcome = battle.run(&mut AlwaysAttack, &mut AlwaysAttack).unwrap();

    assert_eq!(outcome, BattleOutcome::Ongoing);
    assert_eq!(battle.turn(), 10);
    // Zero-power hits still deal the minimum, so both sides lost 10 hp.
    for side in SideId::BOTH {
        assert_eq!(battle.side(side).active().unwrap().hp(), 90);
    }
}

/// A controller that returns an illegal action surfaces a contract violation.
#[test]
fn test_illegal_controller_action_is_rejected() {
    let a = side(SideId::A, vec![fighter(1, Element::Normal, 100, 5, 1)]);
    let b = side(SideId::B, vec![fighter(2, Element::Normal, 100, 5, 1)]);
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();

    let mut cheater = Scripted {
        actions: vec![Action::Swap { target: 0 }],
        replacements: vec![],
    };
    let err = battle.play_turn(&mut cheater, &mut AlwaysAttack).unwrap_err();

    assert!(err.is_contract_violation());
    assert_eq!(battle.turn(), 0);
}

/// Tearing down a finished battle restores every creature for reuse.
#[test]
fn test_finish_restores_roster() {
    let a = side(SideId::A, vec![fighter(1, Element::Normal, 100, 200, 10)]);
    let b = side(
        SideId::B,
        vec![fighter(2, Element::Normal, 100, 1, 1), fighter(3, Element::Normal, 100, 1, 1)],
    );
    let mut battle = Battle::new(BattleConfig::default(), a, b).unwrap();
    battle.run(&mut AlwaysAttack, &mut AlwaysAttack).unwrap();
    assert!(battle.is_over());

    let (red, blue) = battle.finish().into_pair();
    assert_eq!(blue.alive_count(), 2);
    assert_eq!(blue.active_slot(), Some(0));
    assert!(red.party().iter().all(|c| c.hp() == c.max_hp()));

    // The reset roster can start a new battle.
    assert!(Battle::new(BattleConfig::default(), red, blue).is_ok());
}

/// A creature loaded with more hp than its max cannot join a side.
#[test]
fn test_loaded_creature_above_max_hp_rejected() {
    let json = r#"{
        "id": 12,
        "name": "Bloat",
        "element": "water",
        "stats": {"max_hp": 10, "attack": 4, "defense": 4, "sp_attack": 4, "sp_defense": 4, "speed": 4},
        "hp": 999,
        "skills": [{"name": "Bubble", "element": "water", "category": "special", "base_damage": 3}]
    }"#;
    let bloated: Creature = serde_json::from_str(json).unwrap();

    let err = Side::new(SideId::A, "Red", Control::Human, vec![bloated]).unwrap_err();
    assert_eq!(err.kind(), creature_battle::ErrorKind::Configuration);
    assert_eq!(
        err,
        creature_battle::BattleError::HpAboveMax { id: CreatureId::new(12), hp: 999, max_hp: 10 }
    );
}
