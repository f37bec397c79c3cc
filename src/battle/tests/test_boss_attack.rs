#[cfg(test)]
mod tests {
    use crate::battle::state::{BattleEvent, TurnRng};
    use crate::battle::tests::common::{
        apply_boss_attack, avenger, berserk, create_test_session, medic, no_rng, warrior,
    };
    use crate::entity::Entity;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Ability;

    #[test]
    fn test_boss_hits_every_living_hero_and_skips_the_fallen() {
        // Arrange
        let mut session = create_test_session(
            1000,
            10,
            vec![
                warrior().with_health(100).build(),
                medic(5).with_health(0).build(),
                avenger().with_health(50).build(),
            ],
        );
        session.boss.set_defence(Ability::Heal);

        // Act
        let bus = apply_boss_attack(&mut session, &mut no_rng());

        // Assert
        let healths: Vec<i32> = session.heroes.iter().map(|hero| hero.health()).collect();
        assert_eq!(healths, vec![90, 0, 40]);
        let struck: Vec<usize> = bus
            .events()
            .iter()
            .filter_map(|event| match event {
                BattleEvent::BossStruck { hero, .. } => Some(*hero),
                _ => None,
            })
            .collect();
        assert_eq!(struck, vec![0, 2]);
    }

    #[test]
    fn test_protection_absorbs_the_hit_and_is_spent() {
        let mut session = create_test_session(1000, 30, vec![warrior().with_health(100).build()]);
        session.boss.set_defence(Ability::CriticalDamage);
        session.heroes[0].grant_protection();

        let bus = apply_boss_attack(&mut session, &mut no_rng());

        let hero = &session.heroes[0];
        assert_eq!(hero.health(), 100);
        assert!(!hero.is_protected());
        assert_eq!(bus.events(), &[BattleEvent::ProtectionAbsorbed { hero: 0 }]);

        // Protection lasts for one attack only.
        apply_boss_attack(&mut session, &mut no_rng());
        assert_eq!(session.heroes[0].health(), 70);
    }

    #[rstest]
    #[case("small block", 0, 5, 215)]
    #[case("large block", 1, 10, 220)]
    fn test_berserk_blocks_part_of_the_hit(
        #[case] desc: &str,
        #[case] roll: i32,
        #[case] expected_block: i32,
        #[case] expected_health: i32,
    ) {
        let mut session = create_test_session(1000, 50, vec![berserk().with_health(260).build()]);
        session.boss.set_defence(Ability::Heal);

        let bus = apply_boss_attack(&mut session, &mut TurnRng::new_for_test(vec![roll]));

        let hero = &session.heroes[0];
        assert_eq!(hero.health(), expected_health, "health mismatch for {}", desc);
        assert_eq!(hero.round_effects.blocked_damage, expected_block);
        assert!(bus
            .events()
            .contains(&BattleEvent::DamageBlocked { hero: 0, blocked: expected_block }));
    }

    #[test]
    fn test_berserk_cannot_block_against_its_own_tag() {
        let mut session = create_test_session(1000, 50, vec![berserk().with_health(260).build()]);
        session.boss.set_defence(Ability::BlockRevert);

        // No block roll is drawn.
        apply_boss_attack(&mut session, &mut no_rng());

        assert_eq!(session.heroes[0].health(), 210);
        assert_eq!(session.heroes[0].round_effects.blocked_damage, 0);
    }

    #[test]
    fn test_berserk_block_larger_than_the_hit_heals() {
        let mut session = create_test_session(1000, 5, vec![berserk().with_health(100).build()]);
        session.boss.set_defence(Ability::Revive);

        apply_boss_attack(&mut session, &mut TurnRng::new_for_test(vec![1]));

        assert_eq!(session.heroes[0].health(), 105);
    }

    #[test]
    fn test_overkill_clamps_health_at_zero() {
        let mut session = create_test_session(1000, 500, vec![warrior().with_health(100).build()]);
        session.boss.set_defence(Ability::Heal);

        let bus = apply_boss_attack(&mut session, &mut no_rng());

        assert_eq!(session.heroes[0].health(), 0);
        assert!(bus.events().contains(&BattleEvent::HeroFallen { hero: 0 }));
    }
}
