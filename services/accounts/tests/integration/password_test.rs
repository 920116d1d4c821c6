use uuid::Uuid;

use aurum_accounts::domain::types::Purpose;
use aurum_accounts::error::AccountsServiceError;
use aurum_accounts::usecase::password::{
    ChangePasswordInput, ChangePasswordUseCase, ResetPasswordInput, ResetPasswordUseCase,
};

use crate::helpers::{
    MockAccountRepo, MockChallengeRepo, MockClock, TEST_BCRYPT_COST, test_account,
    test_challenge, test_now,
};

fn reset_input(email: &str) -> ResetPasswordInput {
    ResetPasswordInput {
        email: email.to_owned(),
        password: "N3w!Passw0rd".to_owned(),
    }
}

// ── ResetPasswordUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_reset_password_after_verified_challenge() {
    let account = test_account("bob@example.com", "Old!Pass1");
    let account_id = account.id;
    let mut challenge = test_challenge("bob@example.com", Purpose::ForgotPassword, test_now());
    challenge.verified = true;

    let challenge_repo = MockChallengeRepo::new(vec![challenge]);
    let challenges_handle = challenge_repo.challenges_handle();
    let account_repo = MockAccountRepo::new(vec![account]);
    let accounts_handle = account_repo.accounts_handle();

    let uc = ResetPasswordUseCase {
        accounts: account_repo,
        challenges: challenge_repo,
        clock: MockClock::at(test_now()),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    uc.execute(reset_input("bob@example.com")).await.unwrap();

    let accounts = accounts_handle.lock().unwrap();
    let account = accounts.iter().find(|a| a.id == account_id).unwrap();
    assert!(bcrypt::verify("N3w!Passw0rd", &account.password_hash).unwrap());
    assert!(
        !bcrypt::verify("Old!Pass1", &account.password_hash).unwrap(),
        "old password must stop working"
    );
    assert!(
        challenges_handle.lock().unwrap().is_empty(),
        "reset must consume the challenge"
    );
}

#[tokio::test]
async fn should_reject_second_reset_reusing_consumed_challenge() {
    let mut challenge = test_challenge("bob@example.com", Purpose::ForgotPassword, test_now());
    challenge.verified = true;

    let challenge_repo = MockChallengeRepo::new(vec![challenge]);
    let account_repo = MockAccountRepo::new(vec![test_account("bob@example.com", "Old!Pass1")]);

    let uc = ResetPasswordUseCase {
        accounts: account_repo,
        challenges: challenge_repo,
        clock: MockClock::at(test_now()),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    uc.execute(reset_input("bob@example.com")).await.unwrap();
    let result = uc.execute(reset_input("bob@example.com")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::ChallengeNotVerified)),
        "expected ChallengeNotVerified, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_resetting_for_unknown_email() {
    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::empty(),
        challenges: MockChallengeRepo::empty(),
        clock: MockClock::at(test_now()),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc.execute(reset_input("nobody@example.com")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::AccountNotFound)),
        "expected AccountNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_reset_when_challenge_not_verified() {
    let challenge_repo = MockChallengeRepo::new(vec![test_challenge(
        "bob@example.com",
        Purpose::ForgotPassword,
        test_now(),
    )]);

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![test_account("bob@example.com", "Old!Pass1")]),
        challenges: challenge_repo,
        clock: MockClock::at(test_now()),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc.execute(reset_input("bob@example.com")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::ChallengeNotVerified)),
        "expected ChallengeNotVerified, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_reset_when_verified_challenge_has_expired() {
    let mut challenge = test_challenge("bob@example.com", Purpose::ForgotPassword, test_now());
    challenge.verified = true;
    let clock = MockClock::at(test_now());
    clock.advance(600);

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![test_account("bob@example.com", "Old!Pass1")]),
        challenges: MockChallengeRepo::new(vec![challenge]),
        clock,
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc.execute(reset_input("bob@example.com")).await;

    assert!(
        matches!(result, Err(AccountsServiceError::ChallengeNotVerified)),
        "expected ChallengeNotVerified, got {result:?}"
    );
}

// ── ChangePasswordUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_change_password_with_correct_current_password() {
    let account = test_account("bob@example.com", "Old!Pass1");
    let account_id = account.id;
    let account_repo = MockAccountRepo::new(vec![account]);
    let accounts_handle = account_repo.accounts_handle();

    let uc = ChangePasswordUseCase {
        accounts: account_repo,
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    uc.execute(
        account_id,
        ChangePasswordInput {
            current_password: "Old!Pass1".to_owned(),
            new_password: "N3w!Passw0rd".to_owned(),
        },
    )
    .await
    .unwrap();

    let accounts = accounts_handle.lock().unwrap();
    assert!(bcrypt::verify("N3w!Passw0rd", &accounts[0].password_hash).unwrap());
}

#[tokio::test]
async fn should_reject_change_with_wrong_current_password() {
    let account = test_account("bob@example.com", "Old!Pass1");
    let account_id = account.id;

    let uc = ChangePasswordUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc
        .execute(
            account_id,
            ChangePasswordInput {
                current_password: "Guess!Pass1".to_owned(),
                new_password: "N3w!Passw0rd".to_owned(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::WrongPassword)),
        "expected WrongPassword, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_weak_new_password() {
    let account = test_account("bob@example.com", "Old!Pass1");
    let account_id = account.id;

    let uc = ChangePasswordUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc
        .execute(
            account_id,
            ChangePasswordInput {
                current_password: "Old!Pass1".to_owned(),
                new_password: "weakpass".to_owned(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::WeakPassword)),
        "expected WeakPassword, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_changing_password_for_missing_account() {
    let uc = ChangePasswordUseCase {
        accounts: MockAccountRepo::empty(),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let result = uc
        .execute(
            Uuid::now_v7(),
            ChangePasswordInput {
                current_password: "Old!Pass1".to_owned(),
                new_password: "N3w!Passw0rd".to_owned(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::AccountNotFound)),
        "expected AccountNotFound, got {result:?}"
    );
}
