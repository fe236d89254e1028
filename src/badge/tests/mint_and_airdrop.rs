#[cfg(test)]
mod mint_and_airdrop_tests {
    use alloc::string::ToString;
    use alloc::vec;

    use odra::casper_types::U256;
    use odra::host::HostRef;

    use crate::badge::errors::Error::{
        ArithmeticOverflow, LengthMismatch, MintingDisabled, PermissionDenied, UnknownType,
    };
    use crate::badge_registry::tests::{setup, NFT_A, NFT_B};

    #[test]
    fn should_not_mint_while_disabled() {
        let (env, _, operator, user1, _, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());

        env.set_caller(user1);
        let result = registry.try_mint(NFT_A.to_string());
        assert_eq!(result.err().unwrap(), MintingDisabled.into());
        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::zero());
    }

    #[test]
    fn should_not_mint_unknown_type() {
        let (env, _, _, user1, _, mut registry) = setup();
        env.set_caller(user1);
        let result = registry.try_mint(NFT_A.to_string());
        assert_eq!(result.err().unwrap(), MintingDisabled.into());
    }

    #[test]
    fn should_mint_once_enabled() {
        let (env, _, operator, user1, user2, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());
        registry.add_type(NFT_B.to_string());
        registry.control_mint(NFT_A.to_string(), true);
        registry.control_mint(NFT_B.to_string(), true);

        env.set_caller(user1);
        registry.mint(NFT_A.to_string());
        assert!(env.emitted(&registry, "Mint"), "Mint event not emitted");
        env.set_caller(user2);
        registry.mint(NFT_B.to_string());
        registry.mint(NFT_B.to_string());

        let token_a = registry.get_token_id(NFT_A.to_string());
        let token_b = registry.get_token_id(NFT_B.to_string());
        assert_eq!(registry.balance_of(&user1, token_a), U256::one());
        assert_eq!(registry.balance_of(&user1, token_b), U256::zero());
        assert_eq!(registry.balance_of(&user2, token_b), U256::from(2));
        assert_eq!(registry.total_supply(token_a), U256::one());
        assert_eq!(registry.total_supply(token_b), U256::from(2));
    }

    #[test]
    fn should_not_mint_after_disabling() {
        let (env, _, operator, user1, _, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());
        registry.control_mint(NFT_A.to_string(), true);
        env.set_caller(user1);
        registry.mint(NFT_A.to_string());

        env.set_caller(operator);
        registry.control_mint(NFT_A.to_string(), false);
        env.set_caller(user1);
        let result = registry.try_mint(NFT_A.to_string());
        assert_eq!(result.err().unwrap(), MintingDisabled.into());
        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::one());
    }

    #[test]
    fn should_airdrop() {
        let (env, _, operator, user1, user2, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_B.to_string());
        registry.mint_and_airdrop(
            NFT_B.to_string(),
            vec![user1, user2],
            vec![U256::one(), U256::from(2)],
        );
        assert!(env.emitted(&registry, "Airdrop"), "Airdrop event not emitted");

        let token_id = registry.get_token_id(NFT_B.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::one());
        assert_eq!(registry.balance_of(&user2, token_id), U256::from(2));
        assert_eq!(registry.total_supply(token_id), U256::from(3));
        assert_eq!(
            registry.balance_of_batch(vec![user1, user2], vec![token_id, token_id]),
            vec![U256::one(), U256::from(2)]
        );
    }

    #[test]
    fn airdrop_accumulates_duplicates_and_skips_zero() {
        let (env, _, operator, user1, user2, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());
        registry.mint_and_airdrop(
            NFT_A.to_string(),
            vec![user1, user2, user1],
            vec![U256::one(), U256::zero(), U256::from(4)],
        );

        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::from(5));
        assert_eq!(registry.balance_of(&user2, token_id), U256::zero());
        assert_eq!(registry.total_supply(token_id), U256::from(5));
    }

    #[test]
    fn airdrop_with_mismatched_lengths_changes_nothing() {
        let (env, _, operator, user1, user2, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());
        let result = registry.try_mint_and_airdrop(
            NFT_A.to_string(),
            vec![user1, user2],
            vec![U256::one()],
        );
        assert_eq!(result.err().unwrap(), LengthMismatch.into());

        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::zero());
        assert_eq!(registry.total_supply(token_id), U256::zero());
    }

    #[test]
    fn airdrop_overflow_changes_nothing() {
        let (env, _, operator, user1, user2, mut registry) = setup();
        env.set_caller(operator);
        registry.add_type(NFT_A.to_string());
        registry.mint_and_airdrop(NFT_A.to_string(), vec![user1], vec![U256::one()]);

        let result = registry.try_mint_and_airdrop(
            NFT_A.to_string(),
            vec![user2, user1],
            vec![U256::from(7), U256::MAX],
        );
        assert_eq!(result.err().unwrap(), ArithmeticOverflow.into());

        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::one());
        assert_eq!(registry.balance_of(&user2, token_id), U256::zero());
        assert_eq!(registry.total_supply(token_id), U256::one());
    }

    #[test]
    fn airdrop_requires_operator_and_active_type() {
        let (env, owner, operator, user1, _, mut registry) = setup();
        env.set_caller(operator);
        let result =
            registry.try_mint_and_airdrop(NFT_A.to_string(), vec![user1], vec![U256::one()]);
        assert_eq!(result.err().unwrap(), UnknownType.into());

        registry.add_type(NFT_A.to_string());
        for caller in [owner, user1] {
            env.set_caller(caller);
            let result =
                registry.try_mint_and_airdrop(NFT_A.to_string(), vec![user1], vec![U256::one()]);
            assert_eq!(result.err().unwrap(), PermissionDenied.into());
        }
        let token_id = registry.get_token_id(NFT_A.to_string());
        assert_eq!(registry.balance_of(&user1, token_id), U256::zero());
    }

    #[test]
    fn balance_of_batch_requires_equal_lengths() {
        let (_, _, _, user1, user2, registry) = setup();
        let result = registry.try_balance_of_batch(vec![user1, user2], vec![1]);
        assert_eq!(result.err().unwrap(), LengthMismatch.into());
    }
}
