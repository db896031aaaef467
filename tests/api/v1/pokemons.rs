mod list {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::models::pokemon_type::PokemonType;
    use poke_advisor::services::pokemon::PokemonsPage;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_default_page() {
        init_test_service!(app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons").to_request();
        let page: PokemonsPage = test::call_and_read_body_json(&service, req).await;

        assert_eq!(10, page.pokemons.len());
        assert_eq!("Bulbasaur", page.pokemons[0].name);
        assert_eq!(1, page.page);
        assert_eq!(10, page.page_size);
        assert_eq!(31, page.total_pages);
        assert_eq!(305, app.get_dex().all_pokemon().len());
    }

    #[test_log::test(actix_web::test)]
    async fn test_paginated_list() {
        init_test_service!(_app, service);

        for page_number in 1i64..=2 {
            let req = test::TestRequest::with_uri(&format!(
                "/api/v1/pokemons?page={}&page_size={}",
                page_number, 5
            ))
            .to_request();
            let page: PokemonsPage = test::call_and_read_body_json(&service, req).await;

            assert_eq!(5, page.pokemons.len());
            assert_eq!(page_number, page.page);
            assert_eq!(5, page.page_size);
            assert_eq!(61, page.total_pages);
        }

        let req = test::TestRequest::with_uri("/api/v1/pokemons?page=2&page_size=5").to_request();
        let page: PokemonsPage = test::call_and_read_body_json(&service, req).await;
        assert_eq!("Machamp", page.pokemons[0].name);

        let req = test::TestRequest::with_uri("/api/v1/pokemons?page=62&page_size=5").to_request();
        let page: PokemonsPage = test::call_and_read_body_json(&service, req).await;

        assert!(page.pokemons.is_empty());
        assert_eq!(62, page.page);
        assert_eq!(61, page.total_pages);
    }

    #[test_log::test(actix_web::test)]
    async fn test_huge_page() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(&format!(
            "/api/v1/pokemons?page={}&page_size=100",
            i64::MAX
        ))
        .to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::OK, result.status());

        let page: PokemonsPage = test::read_body_json(result).await;
        assert!(page.pokemons.is_empty());
        assert_eq!(i64::MAX, page.page);
        assert_eq!(4, page.total_pages);
    }

    #[test_log::test(actix_web::test)]
    async fn test_type_filter() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons?type=ghost&page_size=100").to_request();
        let page: PokemonsPage = test::call_and_read_body_json(&service, req).await;

        assert!(!page.pokemons.is_empty());
        assert_eq!("Gengar", page.pokemons[0].name);
        assert!(page
            .pokemons
            .iter()
            .all(|pokemon| pokemon.types.contains(&PokemonType::Ghost)));
        assert_eq!(1, page.total_pages);
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_query_params() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons?foo=bar").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_query_param_values() {
        init_test_service!(_app, service);

        let req =
            test::TestRequest::with_uri("/api/v1/pokemons?page=foo&page_size=bar").to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, result.status());

        let req = test::TestRequest::with_uri("/api/v1/pokemons?type=Shadow").to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_query_param_validation() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons?page=0&page_size=0").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }
}

mod get {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::api::errors::ErrorResponse;
    use poke_advisor::models::pokemon::Pokemon;
    use poke_advisor::models::pokemon_type::PokemonType;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_exists() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons/charizard").to_request();
        let pokemon: Pokemon = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Charizard", pokemon.name);
        assert_eq!(vec![PokemonType::Fire, PokemonType::Flying], pokemon.types);
    }

    #[test_log::test(actix_web::test)]
    async fn test_does_not_exist() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons/Missingno").to_request();
        let result = test::call_service(&service, req).await;
        assert_eq!(StatusCode::NOT_FOUND, result.status());

        let error_response: ErrorResponse = test::read_body_json(result).await;
        assert_eq!(StatusCode::NOT_FOUND, error_response.status_code);
        assert_eq!(Some("Pokemon not found: Missingno".to_string()), error_response.details);
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_path_param_validation() {
        init_test_service!(_app, service);

        let name = "a".repeat(65);
        let req = test::TestRequest::with_uri(&format!("/api/v1/pokemons/{}", name)).to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::BAD_REQUEST, result.status());
    }
}

mod coverage {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::services::moves::{CoverageQuality, MoveCoverage};

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_with_moves() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons/Charizard/coverage").to_request();
        let coverage: MoveCoverage = test::call_and_read_body_json(&service, req).await;

        assert_eq!("Charizard", coverage.pokemon);
        assert_eq!(6, coverage.total_moves);
        assert_eq!(CoverageQuality::Excellent, coverage.coverage_quality);
        assert!(coverage.message.is_none());
    }

    #[test_log::test(actix_web::test)]
    async fn test_without_moves() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons/Bulbasaur/coverage").to_request();
        let coverage: MoveCoverage = test::call_and_read_body_json(&service, req).await;

        assert_eq!(0, coverage.total_moves);
        assert_eq!(Some("No move data available for Bulbasaur".to_string()), coverage.message);
    }

    #[test_log::test(actix_web::test)]
    async fn test_does_not_exist() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/pokemons/Agumon/coverage").to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::NOT_FOUND, result.status());
    }
}
