mod analysis {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::api::errors::ErrorResponse;
    use poke_advisor::api::v1::teams::TeamRequest;
    use poke_advisor::models::pokemon_type::PokemonType;
    use poke_advisor::services::team::{DiversityRating, TeamAnalysis};
    use serde_json::json;

    use crate::init_test_service;

    fn team_request(members: &[&str]) -> TeamRequest {
        TeamRequest { members: members.iter().map(|&member| member.into()).collect() }
    }

    #[test_log::test(actix_web::test)]
    async fn test_starters() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/analysis")
            .set_json(team_request(&["charizard", "Blastoise", "VENUSAUR"]))
            .to_request();
        let analysis: TeamAnalysis = test::call_and_read_body_json(&service, req).await;

        assert_eq!(3, analysis.team_size);
        assert_eq!(vec!["Charizard", "Blastoise", "Venusaur"], analysis.pokemon_list);
        assert_eq!(5, analysis.type_analysis.unique_types);
        assert_eq!(DiversityRating::Poor, analysis.type_analysis.diversity_rating);
        assert_eq!(16, analysis.coverage_analysis.excellent_coverage.len());

        let critical_weaknesses = &analysis.weakness_analysis.critical_weaknesses;
        assert_eq!(1, critical_weaknesses.len());
        assert_eq!(PokemonType::Electric, critical_weaknesses[0].pokemon_type);
        assert_eq!(vec!["Charizard", "Blastoise"], critical_weaknesses[0].members);

        assert_eq!(2, analysis.synergy_analysis.overall_synergy);
        assert_eq!(
            vec![
                "Add 3 more Pokémon to complete your team.",
                "Add resistance to: Electric",
                "Consider adding more diverse Pokémon types for better coverage.",
            ],
            analysis.recommendations
        );
    }

    #[test_log::test(actix_web::test)]
    async fn test_empty_team() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/analysis")
            .set_json(team_request(&[]))
            .to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, result.status());

        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(Some("no Pokemon in team to analyze".to_string()), error_response.details);
    }

    #[test_log::test(actix_web::test)]
    async fn test_duplicate_member() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/analysis")
            .set_json(team_request(&["Gengar", "Snorlax", "gengar"]))
            .to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, result.status());

        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(Some("Gengar is already in the team".to_string()), error_response.details);
    }

    #[test_log::test(actix_web::test)]
    async fn test_unknown_member() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/analysis")
            .set_json(team_request(&["Gengar", "Missingno"]))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }

    #[test_log::test(actix_web::test)]
    async fn test_too_many_members() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/analysis")
            .set_json(team_request(&[
                "Charizard",
                "Blastoise",
                "Venusaur",
                "Pikachu",
                "Machamp",
                "Gengar",
                "Snorlax",
            ]))
            .to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_payload() {
        init_test_service!(_app, service);

        for payload in [json!({ "team": ["Gengar"] }), json!({ "members": "Gengar" })] {
            let req = test::TestRequest::post()
                .uri("/api/v1/teams/analysis")
                .set_json(&payload)
                .to_request();
            let result = test::call_service(&service, req).await;

            assert_eq!(StatusCode::BAD_REQUEST, result.status(), "payload: {}", payload);
        }
    }
}

mod suggestions {
    use actix_web::test;
    use poke_advisor::api::v1::teams::TeamRequest;
    use poke_advisor::services::team::{TeamSuggestions, BALANCED_STARTERS};

    use crate::init_test_service;

    fn suggestion_names(suggestions: &TeamSuggestions) -> Vec<&str> {
        suggestions
            .suggestions
            .iter()
            .map(|pokemon| pokemon.name.as_str())
            .collect()
    }

    #[test_log::test(actix_web::test)]
    async fn test_empty_team() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/suggestions")
            .set_json(TeamRequest::default())
            .to_request();
        let suggestions: TeamSuggestions = test::call_and_read_body_json(&service, req).await;

        assert!(suggestions.team.is_empty());
        assert_eq!(BALANCED_STARTERS.to_vec(), suggestion_names(&suggestions));
    }

    #[test_log::test(actix_web::test)]
    async fn test_partial_team() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/suggestions")
            .set_json(TeamRequest {
                members: vec!["Charizard".into(), "Blastoise".into(), "Venusaur".into()],
            })
            .to_request();
        let suggestions: TeamSuggestions = test::call_and_read_body_json(&service, req).await;

        assert_eq!(vec!["Charizard", "Blastoise", "Venusaur"], suggestions.team);
        assert_eq!(vec!["Bulbasaur", "Pikachu", "Onix"], suggestion_names(&suggestions));
    }

    #[test_log::test(actix_web::test)]
    async fn test_shared_weaknesses() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/suggestions")
            .set_json(TeamRequest {
                members: vec![
                    "Pikachu".into(),
                    "Gyarados".into(),
                    "Lanturn".into(),
                    "Charizard".into(),
                ],
            })
            .to_request();
        let suggestions: TeamSuggestions = test::call_and_read_body_json(&service, req).await;

        assert_eq!(
            vec!["Dragonite", "Togekiss", "Bulbasaur", "Onix"],
            suggestion_names(&suggestions)
        );
    }

    #[test_log::test(actix_web::test)]
    async fn test_nothing_to_suggest() {
        init_test_service!(_app, service);

        let req = test::TestRequest::post()
            .uri("/api/v1/teams/suggestions")
            .set_json(TeamRequest { members: vec!["Machamp".into(), "Golem".into()] })
            .to_request();
        let suggestions: TeamSuggestions = test::call_and_read_body_json(&service, req).await;

        assert!(suggestions.suggestions.is_empty());
    }
}
