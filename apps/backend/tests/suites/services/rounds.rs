use quiz_backend::adapters::leaderboard_sea;
use quiz_backend::db::require_db;
use quiz_backend::domain::{Level, StartRequest};
use quiz_backend::errors::ErrorCode;
use quiz_backend::services::rounds::{RoundService, SubmitOutcome};
use quiz_backend::state::app_state::AppState;
use quiz_backend::state::session_store::SessionId;
use quiz_backend::AppError;

use crate::support::build_test_state;
use crate::support::test_state::build_state_without_db;

fn start_request<'a>(name: &'a str, level: &'a str) -> StartRequest<'a> {
    StartRequest {
        player_name: Some(name),
        level: Some(level),
    }
}

async fn correct(state: &AppState, id: SessionId) -> String {
    let round = state.sessions().get(&id).await.unwrap();
    round.question.correct_answer().unwrap().to_string()
}

#[tokio::test]
async fn start_stores_fresh_round() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();

    let id = service
        .start(&state, None, start_request("Alice", "easy"))
        .await?;

    let round = service.current(&state, Some(id)).await.unwrap();
    assert_eq!(round.player_name, "Alice");
    assert_eq!(round.level, Level::Easy);
    assert_eq!(round.score, 0);
    assert_eq!(round.questions_answered, 0);
    assert_eq!(round.timeleft, 30);
    assert!((1..=10).contains(&round.question.num1));
    assert!((1..=10).contains(&round.question.num2));
    Ok(())
}

#[tokio::test]
async fn invalid_start_stores_nothing() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();
    let previous = service
        .start(&state, None, start_request("Alice", "easy"))
        .await?;

    let err = service
        .start(&state, Some(previous), start_request("Alice", "nightmare"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLevel);

    // The caller's existing round survives a rejected form
    assert!(service.current(&state, Some(previous)).await.is_some());
    Ok(())
}

#[tokio::test]
async fn score_is_correct_minus_wrong() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();
    let id = service
        .start(&state, None, start_request("Bea", "hard"))
        .await?;

    // correct, wrong, correct, correct, wrong
    let pattern = [true, false, true, true, false];
    for (i, right) in pattern.into_iter().enumerate() {
        let answer = if right {
            correct(&state, id).await
        } else {
            "not a number".to_string()
        };
        let timeleft = (25 - i).to_string();

        let outcome = service
            .submit(&state, Some(id), Some(answer.as_str()), Some(timeleft.as_str()))
            .await?;
        assert_eq!(outcome, SubmitOutcome::Continue { correct: right });
    }

    let round = service.current(&state, Some(id)).await.unwrap();
    assert_eq!(round.questions_answered, 5);
    assert_eq!(round.score, 3 - 2);
    assert_eq!(round.timeleft, 21);
    Ok(())
}

#[tokio::test]
async fn missing_answer_is_wrong() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();
    let id = service
        .start(&state, None, start_request("Cal", "easy"))
        .await?;

    let outcome = service.submit(&state, Some(id), None, Some("12")).await?;
    assert_eq!(outcome, SubmitOutcome::Continue { correct: false });
    assert_eq!(service.current(&state, Some(id)).await.unwrap().score, -1);
    Ok(())
}

#[tokio::test]
async fn round_end_appends_exactly_one_entry() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();
    let id = service
        .start(&state, None, start_request("Dana", "easy"))
        .await?;

    for timeleft in ["20", "10", "5"] {
        let answer = correct(&state, id).await;
        service
            .submit(&state, Some(id), Some(answer.as_str()), Some(timeleft))
            .await?;
    }
    let answer = correct(&state, id).await;
    let outcome = service
        .submit(&state, Some(id), Some(answer.as_str()), Some("0"))
        .await?;

    let SubmitOutcome::Finished(entry) = outcome else {
        panic!("expected round to finish, got {outcome:?}");
    };
    assert_eq!(entry.player_name, "Dana");
    assert_eq!(entry.score, 4);
    assert_eq!(entry.total_time, 30);
    assert_eq!(entry.average_time, 7.5);

    assert!(service.current(&state, Some(id)).await.is_none());
    assert_eq!(leaderboard_sea::count(require_db(&state)?).await?, 1);

    // Nothing left to submit against
    let again = service.submit(&state, Some(id), Some("1"), Some("0")).await?;
    assert_eq!(again, SubmitOutcome::NoSession);
    assert_eq!(leaderboard_sea::count(require_db(&state)?).await?, 1);
    Ok(())
}

#[tokio::test]
async fn invalid_timeleft_leaves_round_alone() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();
    let id = service
        .start(&state, None, start_request("Eli", "easy"))
        .await?;
    let before = service.current(&state, Some(id)).await;

    for timeleft in [None, Some(""), Some("ten")] {
        let err = service
            .submit(&state, Some(id), Some("3"), timeleft)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTimeleft);
    }

    assert_eq!(service.current(&state, Some(id)).await, before);
    Ok(())
}

#[tokio::test]
async fn no_session_is_not_an_error() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let service = RoundService::new();

    let outcome = service.submit(&state, None, Some("1"), Some("5")).await?;
    assert_eq!(outcome, SubmitOutcome::NoSession);

    let unknown = SessionId::generate();
    let outcome = service
        .submit(&state, Some(unknown), Some("1"), Some("5"))
        .await?;
    assert_eq!(outcome, SubmitOutcome::NoSession);
    Ok(())
}

#[tokio::test]
async fn clear_drops_round() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let service = RoundService::new();
    let id = service
        .start(&state, None, start_request("Fay", "hard"))
        .await?;

    service.clear(&state, Some(id)).await;
    assert!(service.current(&state, Some(id)).await.is_none());

    // Clearing nothing is fine too
    service.clear(&state, None).await;
    Ok(())
}
