use uuid::Uuid;

use aurum_accounts::error::AccountsServiceError;
use aurum_accounts::usecase::profile::{
    GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

use crate::helpers::{MockAccountRepo, test_account};

// ── GetProfileUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_profile_for_existing_account() {
    let account = test_account("alice@example.com", "Str0ng!Pw");

    let uc = GetProfileUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let found = uc.execute(account.id).await.unwrap();
    assert_eq!(found.id, account.id);
    assert_eq!(found.email, "alice@example.com");
    assert_eq!(found.full_name, "Test Account");
    assert_eq!(found.created_at, account.created_at);
}

#[tokio::test]
async fn should_return_not_found_for_missing_profile() {
    let uc = GetProfileUseCase {
        accounts: MockAccountRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;

    assert!(
        matches!(result, Err(AccountsServiceError::AccountNotFound)),
        "expected AccountNotFound, got {result:?}"
    );
}

// ── UpdateProfileUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_trimmed_full_name() {
    let account = test_account("alice@example.com", "Str0ng!Pw");
    let account_id = account.id;
    let account_repo = MockAccountRepo::new(vec![account]);
    let accounts_handle = account_repo.accounts_handle();

    let uc = UpdateProfileUseCase {
        accounts: account_repo,
    };

    uc.execute(
        account_id,
        UpdateProfileInput {
            full_name: "  Alice Liddell  ".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(accounts_handle.lock().unwrap()[0].full_name, "Alice Liddell");
}

#[tokio::test]
async fn should_reject_blank_full_name() {
    let account = test_account("alice@example.com", "Str0ng!Pw");
    let account_id = account.id;

    let uc = UpdateProfileUseCase {
        accounts: MockAccountRepo::new(vec![account]),
    };

    let result = uc
        .execute(
            account_id,
            UpdateProfileInput {
                full_name: "   ".to_owned(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::EmptyName)),
        "expected EmptyName, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_account() {
    let uc = UpdateProfileUseCase {
        accounts: MockAccountRepo::empty(),
    };

    let result = uc
        .execute(
            Uuid::now_v7(),
            UpdateProfileInput {
                full_name: "Alice".to_owned(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AccountsServiceError::AccountNotFound)),
        "expected AccountNotFound, got {result:?}"
    );
}
