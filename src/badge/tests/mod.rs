mod mint_and_airdrop;
