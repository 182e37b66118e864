use super::*;
use crate::state::test_helpers;

#[test]
fn painting_error_to_status_maps_not_found() {
    assert_eq!(painting_error_to_status(PaintingError::NotFound(1)), StatusCode::NOT_FOUND);
}

#[test]
fn painting_error_to_status_maps_validation() {
    let err = PaintingError::Validation("prompt must not be empty".into());
    assert_eq!(painting_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn painting_error_to_status_maps_store_unavailable() {
    let err = PaintingError::StoreUnavailable(sqlx::Error::PoolTimedOut);
    assert_eq!(painting_error_to_status(err), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn create_then_get_painting() {
    let state = test_helpers::test_app_state();
    let artist = test_helpers::seed_artist(&state, "Klimt").await;

    let (status, Json(created)) = create_painting(
        State(state.clone()),
        Json(CreatePaintingBody { prompt: "The Kiss".into(), artist_id: artist.id }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let Json(fetched) = get_painting(State(state), Path(created.id)).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_painting_is_404() {
    let state = test_helpers::test_app_state();
    let err = get_painting(State(state), Path(77)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_empty_prompt_is_422_and_list_unchanged() {
    let state = test_helpers::test_app_state();
    let artist = test_helpers::seed_artist(&state, "Klimt").await;

    let err = create_painting(
        State(state.clone()),
        Json(CreatePaintingBody { prompt: "  ".into(), artist_id: artist.id }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);

    let Json(rows) = list_paintings(State(state)).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn update_painting_sets_title() {
    let state = test_helpers::test_app_state();
    let artist = test_helpers::seed_artist(&state, "Klimt").await;
    let (_, Json(created)) = create_painting(
        State(state.clone()),
        Json(CreatePaintingBody { prompt: "golden portrait".into(), artist_id: artist.id }),
    )
    .await
    .unwrap();

    let Json(updated) = update_painting(
        State(state),
        Path(created.id),
        Json(UpdatePaintingBody { title: "Adele".into() }),
    )
    .await
    .unwrap();

    assert_eq!(updated.title.as_deref(), Some("Adele"));
}

#[tokio::test]
async fn create_artist_then_list() {
    let state = test_helpers::test_app_state();

    let (status, Json(artist)) = create_artist(State(state.clone()), Json(CreateArtistBody { name: "Schiele".into() }))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let Json(artists) = list_artists(State(state)).await.unwrap();
    assert_eq!(artists, vec![artist]);
}

#[test]
fn create_painting_body_uses_camel_case() {
    let body: CreatePaintingBody = serde_json::from_str(r#"{"prompt":"x","artistId":3}"#).unwrap();
    assert_eq!(body.artist_id, 3);
}
