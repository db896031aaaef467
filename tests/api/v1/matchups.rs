mod analyze {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::api::errors::ErrorResponse;
    use poke_advisor::models::pokemon_type::PokemonType;
    use poke_advisor::services::matchup::{MatchupAnalysis, MatchupVerdict};

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_favorable() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups?your=garchomp&opponent=PIKACHU")
            .to_request();
        let analysis: MatchupAnalysis = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Garchomp", analysis.your_pokemon.name);
        assert_eq!(vec![PokemonType::Dragon, PokemonType::Ground], analysis.your_pokemon.types);
        assert_eq!(2.0, analysis.your_pokemon.offensive_multiplier);
        assert_eq!("Pikachu", analysis.opponent_pokemon.name);
        assert_eq!(0.0, analysis.opponent_pokemon.offensive_multiplier);
        assert_eq!(MatchupVerdict::VeryFavorable, analysis.verdict);
        assert_eq!(MatchupVerdict::VeryFavorable.summary(), analysis.matchup_summary);
    }

    #[test_log::test(actix_web::test)]
    async fn test_unfavorable() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups?your=Pikachu&opponent=Garchomp")
            .to_request();
        let analysis: MatchupAnalysis = test::call_and_read_body_json(&service, req).await;

        assert_eq!(MatchupVerdict::VeryUnfavorable, analysis.verdict);
    }

    #[test_log::test(actix_web::test)]
    async fn test_same_pokemon() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups?your=Pikachu&opponent=pikachu")
            .to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, result.status());

        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(
            Some("Pikachu cannot be matched against itself".to_string()),
            error_response.details
        );
    }

    #[test_log::test(actix_web::test)]
    async fn test_unknown_pokemon() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups?your=Pikachu&opponent=Agumon")
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    async fn test_missing_query_param() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups?your=Pikachu").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }
}

mod counters {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::services::matchup::{Counters, DEFAULT_COUNTERS_LIMIT};

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_with_limit() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups/counters?opponent=Charizard&limit=5")
            .to_request();
        let counters: Counters = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Charizard", counters.opponent.name);
        let names: Vec<_> = counters
            .counters
            .iter()
            .map(|counter| counter.name.as_str())
            .collect();
        assert_eq!(vec!["Aerodactyl", "Coalossal", "Corsola", "Geodude", "Golem"], names);
    }

    #[test_log::test(actix_web::test)]
    async fn test_default_limit() {
        init_test_service!(_app, service);

        let req =
            test::TestRequest::with_uri("/api/v1/matchups/counters?opponent=Pikachu").to_request();
        let counters: Counters = test::call_and_read_body_json(&service, req).await;

        assert_eq!(DEFAULT_COUNTERS_LIMIT, counters.counters.len());
        assert!(counters
            .counters
            .iter()
            .all(|counter| counter.name != "Pikachu"));
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_limit() {
        init_test_service!(_app, service);

        for limit in ["0", "51", "ten"] {
            let req = test::TestRequest::with_uri(&format!(
                "/api/v1/matchups/counters?opponent=Pikachu&limit={}",
                limit
            ))
            .to_request();
            let result = test::call_service(&service, req).await;

            assert_eq!(StatusCode::BAD_REQUEST, result.status(), "limit: {}", limit);
        }
    }
}

mod counter_types {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::models::pokemon_type::PokemonType;
    use poke_advisor::services::matchup::CounterTypes;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_dual_type() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups/counter-types?opponent=Charizard")
            .to_request();
        let counter_types: CounterTypes = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Charizard", counter_types.opponent.name);
        let first = &counter_types.types[0];
        assert_eq!(PokemonType::Rock, first.attacking_type);
        assert_eq!(4.0, first.effectiveness);
        assert!(counter_types
            .types
            .iter()
            .all(|counter_type| counter_type.effectiveness > 1.0));
        assert!(counter_types
            .types
            .iter()
            .any(|counter_type| counter_type.attacking_type == PokemonType::Water));
    }

    #[test_log::test(actix_web::test)]
    async fn test_unknown_pokemon() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/matchups/counter-types?opponent=Agumon")
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }
}
