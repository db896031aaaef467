mod list {
    use actix_web::test;
    use poke_advisor::models::pokemon_type::PokemonType;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_all() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/types").to_request();
        let types: Vec<PokemonType> = test::call_and_read_body_json(&service, req).await;

        assert_eq!(PokemonType::ALL.to_vec(), types);
    }
}

mod chart {
    use actix_web::test;
    use poke_advisor::data::type_chart::TypeChartRow;
    use poke_advisor::models::pokemon_type::PokemonType;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_all() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri("/api/v1/types/chart").to_request();
        let rows: Vec<TypeChartRow> = test::call_and_read_body_json(&service, req).await;

        assert_eq!(18, rows.len());
        assert!(rows.iter().all(|row| row.multipliers.len() == 18));

        let normal = &rows[0];
        assert_eq!(PokemonType::Normal, normal.attacking);
        assert!(normal.super_effective.is_empty());
        assert_eq!(vec![PokemonType::Ghost], normal.no_effect);
    }
}

mod effectiveness {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use poke_advisor::data::type_chart::Effectiveness;
    use poke_advisor::models::pokemon_type::PokemonType;
    use poke_advisor::services::types::TypeMatchup;

    use crate::init_test_service;

    #[test_log::test(actix_web::test)]
    async fn test_dual_type() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(
            "/api/v1/types/effectiveness?attacking=Rock&defending=Fire,Flying",
        )
        .to_request();
        let matchup: TypeMatchup = test::call_and_read_body_json(&service, req).await;

        assert_eq!(PokemonType::Rock, matchup.attacking);
        assert_eq!(vec![PokemonType::Fire, PokemonType::Flying], matchup.defending);
        assert_eq!(4.0, matchup.multiplier);
        assert_eq!(Effectiveness::SuperEffective, matchup.effectiveness);
    }

    #[test_log::test(actix_web::test)]
    async fn test_immunity() {
        init_test_service!(_app, service);

        let req = test::TestRequest::with_uri(
            "/api/v1/types/effectiveness?attacking=electric&defending=ground",
        )
        .to_request();
        let matchup: TypeMatchup = test::call_and_read_body_json(&service, req).await;

        assert_eq!(0.0, matchup.multiplier);
        assert_eq!(Effectiveness::NoEffect, matchup.effectiveness);
    }

    #[test_log::test(actix_web::test)]
    async fn test_invalid_defending_types() {
        init_test_service!(_app, service);

        for query in [
            "attacking=Fire",
            "attacking=Fire&defending=Grass,Bug,Steel",
            "attacking=Fire&defending=Grass,Grass",
            "attacking=Fire&defending=Wood",
            "attacking=Wood&defending=Grass",
        ] {
            let req =
                test::TestRequest::with_uri(&format!("/api/v1/types/effectiveness?{}", query))
                    .to_request();
            let result = test::call_service(&service, req).await;

            assert_eq!(StatusCode::BAD_REQUEST, result.status(), "query: {}", query);
        }
    }
}
