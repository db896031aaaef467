mod list {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::models::moves::{Move, MoveCategory};
    use poke_advisor::models::pokemon_type::PokemonType;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_all() {
        init_test_service!(app, service);

        let req = test::TestRequest::with_uri("/api/v1/moves").to_request();
        let moves: Vec<Move> = test::call_and_read_body_json(&service, req).await;

        assert_eq!(app.get_dex().all_moves().len(), moves.len());
        assert_eq!("Fire Blast", moves[0].name);
    }

    #[test_log::test(actix_web::test)]
    async fn test_by_type_and_category() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/moves?type=fire").to_request();
        let moves: Vec<Move> = test::call_and_read_body_json(&service, req).await;
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|a_move| a_move.move_type == PokemonType::Fire));

        let req = test::TestRequest::with_uri("/api/v1/moves?category=Status").to_request();
        let moves: Vec<Move> = test::call_and_read_body_json(&service, req).await;
        assert!(moves.iter().any(|a_move| a_move.name == "Dragon Dance"));
        assert!(moves
            .iter()
            .all(|a_move| a_move.category == MoveCategory::Status && a_move.power == 0));

        let req =
            test::TestRequest::with_uri("/api/v1/moves?type=Dragon&category=Status").to_request();
        let moves: Vec<Move> = test::call_and_read_body_json(&service, req).await;
        assert!(moves.iter().any(|a_move| a_move.name == "Dragon Dance"));
        assert!(moves.iter().all(|a_move| a_move.move_type == PokemonType::Dragon));
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_query_params() {
        init_test_service!(_app, service);

        for query in ["category=Magic", "type=Sound", "power=90"] {
            let req = test::TestRequest::with_uri(&format!("/api/v1/moves?{}", query)).to_request();
            let result = test::call_service(&service, req).await;

            assert_eq!(StatusCode::BAD_REQUEST, result.status(), "query: {}", query);
        }
    }
}

mod get {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::api::errors::ErrorResponse;
    use poke_advisor::models::moves::{Move, MoveCategory};
    use poke_advisor::models::pokemon_type::PokemonType;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_exists() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/moves/thunderbolt").to_request();
        let a_move: Move = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Thunderbolt", a_move.name);
        assert_eq!(PokemonType::Electric, a_move.move_type);
        assert_eq!(90, a_move.power);
        assert_eq!(100, a_move.accuracy);
        assert_eq!(15, a_move.pp);
        assert_eq!(MoveCategory::Special, a_move.category);
    }

    #[test_log::test(actix_web::test)]
    async fn test_name_with_space() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/moves/Dragon%20Dance").to_request();
        let a_move: Move = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Dragon Dance", a_move.name);
    }

    #[test_log::test(actix_web::test)]
    async fn test_does_not_exist() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/moves/Splash").to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::NOT_FOUND, result.status());

        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(Some("move not found: Splash".to_string()), error_response.details);
    }
}

mod recommendations {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::services::moves::MoveRecommendations;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_with_moves() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(
            "/api/v1/moves/recommendations?attacker=Pikachu&defender=Gyarados",
        )
        .to_request();
        let recommendations: MoveRecommendations =
            test::call_and_read_body_json(&service, req).await;

        assert_eq!("Pikachu", recommendations.pokemon);
        assert_eq!("Gyarados", recommendations.opponent);
        let names: Vec<_> = recommendations
            .recommendations
            .iter()
            .map(|analysis| analysis.name.as_str())
            .collect();
        assert_eq!(vec!["Volt Tackle", "Thunderbolt", "Thunder", "Quick Attack"], names);
        assert_eq!(
            Some("Volt Tackle"),
            recommendations
                .best_move
                .as_ref()
                .map(|analysis| analysis.name.as_str())
        );
        assert!(!recommendations.strategy_tips.is_empty());
        assert!(recommendations.message.is_none());
    }

    #[test_log::test(actix_web::test)]
    async fn test_without_moves() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(
            "/api/v1/moves/recommendations?attacker=Bulbasaur&defender=Charizard",
        )
        .to_request();
        let recommendations: MoveRecommendations =
            test::call_and_read_body_json(&service, req).await;

        assert!(recommendations.recommendations.is_empty());
        assert!(recommendations.best_move.is_none());
        assert_eq!(
            Some("No move data available for Bulbasaur".to_string()),
            recommendations.message
        );
    }

    #[test_log::test(actix_web::test)]
    async fn test_unknown_pokemon() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(
            "/api/v1/moves/recommendations?attacker=Pikachu&defender=Agumon",
        )
        .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }
}
