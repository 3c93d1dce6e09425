use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;

use session::errors::DecodeError;
use session::token;
use shared_types::UserId;

use crate::common;

#[test]
fn test_session_token_round_trips_through_claims() {
    let token = common::forge_session_token("ana@example.com", 42, &["ORGANIZADOR"]);

    let claims = token::decode(&token).unwrap();
    assert_eq!(claims.sub, "ana@example.com");
    assert_eq!(claims.user_id, UserId::Num(42));
    assert_eq!(claims.roles, vec!["ORGANIZADOR".to_string()]);
    assert_eq!(claims.primary_role(), Some("ORGANIZADOR"));
}

#[test]
fn test_accented_subject_round_trips() {
    let token = common::forge_token(&json!({
        "sub": "maría.peña@ejemplo.es",
        "usuarioId": "ñ-07",
        "roles": ["ADMINISTRADOR", "ORGANIZADOR"],
    }));

    let claims = token::decode(&token).unwrap();
    assert_eq!(claims.sub, "maría.peña@ejemplo.es");
    assert_eq!(claims.user_id, UserId::Text("ñ-07".to_string()));
    assert_eq!(claims.primary_role(), Some("ADMINISTRADOR"));
}

#[test]
fn test_extra_claims_on_the_wire_are_ignored() {
    let token = common::forge_token(&json!({
        "sub": "ana@example.com",
        "usuarioId": 8,
        "roles": ["PARTICIPANTE"],
        "iat": 1_700_000_000,
        "exp": 1_700_086_400,
        "nombreCompleto": "Ana García",
    }));

    let claims = token::decode(&token).unwrap();
    assert_eq!(claims.sub, "ana@example.com");
    assert_eq!(claims.roles.len(), 1);
}

#[test]
fn test_token_without_roles_claim_decodes_to_no_role() {
    let token = common::forge_token(&json!({
        "sub": "ana@example.com",
        "usuarioId": 8,
    }));

    let claims = token::decode(&token).unwrap();
    assert!(claims.roles.is_empty());
    assert_eq!(claims.primary_role(), None);
}

#[test]
fn test_decode_classifies_each_malformed_shape() {
    assert_eq!(
        token::decode("not-a-token"),
        Err(DecodeError::MissingPayload)
    );
    assert_eq!(token::decode("header.%%%.sig"), Err(DecodeError::Base64));

    let not_json = format!("header.{}.sig", URL_SAFE_NO_PAD.encode("plain text"));
    assert_eq!(token::decode(&not_json), Err(DecodeError::Json));
}

#[test]
fn test_decode_rejects_every_malformed_input_without_panicking() {
    let inputs = [
        "",
        ".",
        "..",
        "a.",
        ".b.c",
        "header.!!!.sig",
        "🦀.🦀.🦀",
        "header.e30.sig",
        "bm90LWEtand0",
    ];

    for input in inputs {
        assert!(token::decode(input).is_err(), "decoded {input:?}");
    }
}
