mod common;

use common::{create_test_database, create_test_flight_data, CountingReporter};
use flightdata_core::{
    ByAirline, ByAirport, DelayStats, FlightById, FlightDataBuilder, FlightRecord, FlightsByDate,
};

fn ids(flights: &[FlightRecord]) -> Vec<i64> {
    flights.iter().map(|f| f.id).collect()
}

fn assert_consistent(stats: &DelayStats) {
    assert!(stats.total_flights > 0);
    assert!(stats.delayed_flights <= stats.total_flights);
    let expected = stats.delayed_flights as f64 * 100.0 / stats.total_flights as f64;
    assert!(
        (stats.delayed_percentage - expected).abs() < 1e-9,
        "{} != {expected}",
        stats.delayed_percentage
    );
}

#[test]
fn test_flight_by_id_returns_canonical_record() {
    let (_temp_dir, data) = create_test_flight_data();

    let flights = data.flight_by_id(&FlightById { flight_id: 1 });

    assert_eq!(
        flights,
        vec![FlightRecord {
            id: 1,
            origin_airport: "JFK".to_string(),
            destination_airport: "LAX".to_string(),
            airline: "Delta".to_string(),
            delay: 15,
        }]
    );
}

#[test]
fn test_flight_by_id_absent_is_empty() {
    let (_temp_dir, data) = create_test_flight_data();

    assert!(data.flight_by_id(&FlightById { flight_id: 999 }).is_empty());
    assert!(data
        .try_flight_by_id(&FlightById { flight_id: 999 })
        .expect("absent id is not an error")
        .is_empty());
}

#[test]
fn test_flight_with_broken_airline_never_leaves_join() {
    let (_temp_dir, data) = create_test_flight_data();

    // Flight 6 references airline 99, which does not exist.
    assert!(data.flight_by_id(&FlightById { flight_id: 6 }).is_empty());
}

#[test]
fn test_every_present_id_returns_exactly_one_match() {
    let (_temp_dir, data) = create_test_flight_data();

    for flight_id in [1, 2, 3, 4, 5, 7, 8] {
        let flights = data.flight_by_id(&FlightById { flight_id });
        assert_eq!(flights.len(), 1, "flight {flight_id}");
        assert_eq!(flights[0].id, flight_id);
    }
}

#[test]
fn test_delay_normalization_through_facade() {
    let (_temp_dir, data) = create_test_flight_data();

    let delay_of = |flight_id| data.flight_by_id(&FlightById { flight_id })[0].delay;

    assert_eq!(delay_of(2), -4, "early departures are preserved");
    assert_eq!(delay_of(3), 0, "NULL delay coerces to zero");
    assert_eq!(delay_of(4), 0, "non-numeric delay coerces to zero");
    assert_eq!(delay_of(7), 45);
}

#[test]
fn test_flights_by_date_matches_exact_day() {
    let (_temp_dir, data) = create_test_flight_data();

    let first = data.flights_by_date(&FlightsByDate {
        day: 1,
        month: 1,
        year: 2015,
    });
    assert_eq!(ids(&first), vec![1, 2, 3]);

    let second = data.flights_by_date(&FlightsByDate {
        day: 2,
        month: 1,
        year: 2015,
    });
    assert_eq!(ids(&second), vec![4, 5, 7]);
    assert_eq!(
        second.iter().map(|f| f.delay).collect::<Vec<_>>(),
        vec![0, 0, 45]
    );
}

#[test]
fn test_flights_by_date_without_matches_is_empty() {
    let (_temp_dir, data) = create_test_flight_data();

    let params = FlightsByDate {
        day: 31,
        month: 12,
        year: 2015,
    };
    assert!(data.flights_by_date(&params).is_empty());

    // No calendar validation happens at this layer.
    let impossible = FlightsByDate {
        day: 31,
        month: 2,
        year: 2015,
    };
    assert!(data
        .try_flights_by_date(&impossible)
        .expect("not an error")
        .is_empty());
}

#[test]
fn test_flights_by_airline_is_exact_and_case_sensitive() {
    let (_temp_dir, data) = create_test_flight_data();

    let delta = data.delayed_flights_by_airline(&ByAirline {
        airline_name: "Delta".to_string(),
    });
    assert_eq!(ids(&delta), vec![1, 3, 5]);
    assert!(delta.iter().all(|f| f.airline == "Delta"));

    assert!(data
        .delayed_flights_by_airline(&ByAirline {
            airline_name: "delta".to_string(),
        })
        .is_empty());
}

#[test]
fn test_airline_name_is_bound_not_interpolated() {
    let (_temp_dir, data) = create_test_flight_data();

    let hostile = ByAirline {
        airline_name: "Delta' OR '1'='1".to_string(),
    };
    assert!(data
        .try_delayed_flights_by_airline(&hostile)
        .expect("bound text is just an unmatched name")
        .is_empty());
}

#[test]
fn test_flights_by_airport_matches_origin_only() {
    let (_temp_dir, data) = create_test_flight_data();

    let jfk = data.delayed_flights_by_airport(&ByAirport {
        airport_code: "JFK".to_string(),
    });
    assert_eq!(ids(&jfk), vec![1, 2, 5, 8]);
    assert!(jfk.iter().all(|f| f.origin_airport == "JFK"));

    assert!(data
        .delayed_flights_by_airport(&ByAirport {
            airport_code: "ZZZ".to_string(),
        })
        .is_empty());
}

#[test]
fn test_delay_percentage_by_airline() {
    let (_temp_dir, data) = create_test_flight_data();

    let airlines = data.delay_percentage_by_airline();

    let names: Vec<&str> = airlines.iter().map(|a| a.airline.as_str()).collect();
    assert_eq!(names, vec!["Delta", "United"]);

    assert_eq!(airlines[0].stats.total_flights, 3);
    assert_eq!(airlines[0].stats.delayed_flights, 1);
    assert_eq!(airlines[1].stats.total_flights, 4);
    assert_eq!(airlines[1].stats.delayed_flights, 2);
    assert_eq!(airlines[1].stats.delayed_percentage, 50.0);

    airlines.iter().for_each(|a| assert_consistent(&a.stats));
}

#[test]
fn test_delay_percentage_by_hour() {
    let (_temp_dir, data) = create_test_flight_data();

    let hours = data.delay_percentage_by_hour();

    let buckets: Vec<Option<u32>> = hours.iter().map(|h| h.hour()).collect();
    assert_eq!(buckets, vec![Some(8), Some(9), Some(14), Some(16), Some(23)]);

    let morning = &hours[0];
    assert_eq!(morning.hour_of_day, "08");
    assert_eq!(morning.stats.total_flights, 3);
    assert_eq!(morning.stats.delayed_flights, 2);

    // The non-numeric delay of flight 4 must not count as delayed.
    let afternoon = &hours[2];
    assert_eq!(afternoon.stats.total_flights, 2);
    assert_eq!(afternoon.stats.delayed_flights, 0);

    hours.iter().for_each(|h| assert_consistent(&h.stats));
}

#[test]
fn test_delay_percentage_by_route() {
    let (_temp_dir, data) = create_test_flight_data();

    let routes = data.delay_percentage_by_route();

    let pairs: Vec<(&str, &str)> = routes
        .iter()
        .map(|r| (r.origin_airport.as_str(), r.destination_airport.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("JFK", "LAX"),
            ("JFK", "SFO"),
            ("LAX", "JFK"),
            ("LAX", "SFO"),
            ("ORD", "JFK"),
            ("SFO", "LAX"),
        ]
    );
    assert_eq!(routes[0].stats.total_flights, 3);
    assert_eq!(routes[0].stats.delayed_flights, 2);

    routes.iter().for_each(|r| assert_consistent(&r.stats));
}

#[test]
fn test_delay_percentage_by_route_with_coordinates() {
    let (_temp_dir, data) = create_test_flight_data();

    let routes = data.delay_percentage_by_route_with_coordinates();

    // Routes touching SFO have no airport row and drop out of the join.
    let pairs: Vec<(&str, &str)> = routes
        .iter()
        .map(|r| {
            (
                r.route.origin_airport.as_str(),
                r.route.destination_airport.as_str(),
            )
        })
        .collect();
    assert_eq!(pairs, vec![("JFK", "LAX"), ("LAX", "JFK"), ("ORD", "JFK")]);

    let jfk_lax = &routes[0];
    let origin = jfk_lax.origin.expect("JFK has coordinates");
    let destination = jfk_lax.destination.expect("LAX has coordinates");
    assert!((origin.latitude - 40.63983).abs() < 1e-9);
    assert!((destination.longitude - -118.40807).abs() < 1e-9);

    // ORD is missing its latitude.
    assert_eq!(routes[2].origin, None);
    assert!(routes[2].destination.is_some());

    routes.iter().for_each(|r| assert_consistent(&r.route.stats));
}

#[test]
fn test_groups_without_flight_ids_are_excluded() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("empty_groups.sqlite3");
    common::seed_database(&db_path);
    {
        let connection = rusqlite::Connection::open(&db_path).expect("open for writing");
        connection
            .execute_batch(
                "INSERT INTO flights (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, \
                 DESTINATION_AIRPORT, SCHEDULED_DEPARTURE, DEPARTURE_DELAY) \
                 VALUES (NULL, 2015, 3, 3, 1, 'BOS', 'JFK', '0550', 10);",
            )
            .expect("insert id-less flight");
    }

    let data = FlightDataBuilder::new()
        .with_database_uri(Some(db_path.to_str().expect("utf-8 path")))
        .build()
        .expect("open");

    // Its hour bucket and route would have zero counted flights.
    assert!(data
        .delay_percentage_by_hour()
        .iter()
        .all(|h| h.hour_of_day != "05"));
    assert!(data
        .delay_percentage_by_route()
        .iter()
        .all(|r| r.origin_airport != "BOS"));

    for hour in data.delay_percentage_by_hour() {
        assert!(!hour.stats.delayed_percentage.is_nan());
        assert_consistent(&hour.stats);
    }
}

#[test]
fn test_delayed_rows_without_flight_ids_do_not_inflate_counts() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("id_less_delays.sqlite3");
    common::seed_database(&db_path);
    {
        let connection = rusqlite::Connection::open(&db_path).expect("open for writing");
        connection
            .execute_batch(
                "INSERT INTO flights (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, \
                 DESTINATION_AIRPORT, SCHEDULED_DEPARTURE, DEPARTURE_DELAY) VALUES \
                 (NULL, 2015, 1, 1, 1, 'JFK', 'LAX', '0830', 10), \
                 (NULL, 2015, 1, 1, 1, 'JFK', 'LAX', '0830', 20);",
            )
            .expect("insert id-less delayed flights");
    }

    let data = FlightDataBuilder::new()
        .with_database_uri(Some(db_path.to_str().expect("utf-8 path")))
        .build()
        .expect("open");

    let hours = data.delay_percentage_by_hour();
    hours.iter().for_each(|h| assert_consistent(&h.stats));
    let eight = hours
        .iter()
        .find(|h| h.hour_of_day == "08")
        .expect("08 bucket");
    assert_eq!((eight.stats.total_flights, eight.stats.delayed_flights), (3, 2));

    let airlines = data.delay_percentage_by_airline();
    airlines.iter().for_each(|a| assert_consistent(&a.stats));
    let delta = airlines
        .iter()
        .find(|a| a.airline == "Delta")
        .expect("Delta row");
    assert_eq!((delta.stats.total_flights, delta.stats.delayed_flights), (3, 1));

    let routes = data.delay_percentage_by_route();
    routes.iter().for_each(|r| assert_consistent(&r.stats));
    let jfk_lax = routes
        .iter()
        .find(|r| r.origin_airport == "JFK" && r.destination_airport == "LAX")
        .expect("JFK-LAX row");
    assert_eq!((jfk_lax.stats.total_flights, jfk_lax.stats.delayed_flights), (3, 2));

    data.delay_percentage_by_route_with_coordinates()
        .iter()
        .for_each(|r| assert_consistent(&r.route.stats));
}

#[test]
fn test_closed_store_yields_empty_results_and_one_report_per_call() {
    let (_temp_dir, uri) = create_test_database();
    let reporter = CountingReporter::default();
    let mut data = FlightDataBuilder::new()
        .with_database_uri(Some(&uri))
        .with_reporter(Box::new(reporter.clone()))
        .build()
        .expect("open");

    data.close();
    assert!(!data.is_open());

    assert!(data.flight_by_id(&FlightById { flight_id: 1 }).is_empty());
    assert_eq!(reporter.count(), 1);

    assert!(data
        .flights_by_date(&FlightsByDate {
            day: 1,
            month: 1,
            year: 2015
        })
        .is_empty());
    assert!(data
        .delayed_flights_by_airline(&ByAirline {
            airline_name: "Delta".to_string()
        })
        .is_empty());
    assert!(data
        .delayed_flights_by_airport(&ByAirport {
            airport_code: "JFK".to_string()
        })
        .is_empty());
    assert!(data.delay_percentage_by_airline().is_empty());
    assert!(data.delay_percentage_by_hour().is_empty());
    assert!(data.delay_percentage_by_route().is_empty());
    assert!(data.delay_percentage_by_route_with_coordinates().is_empty());
    assert_eq!(reporter.count(), 8);
}

#[test]
fn test_sql_failure_is_contained() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("no_tables.sqlite3");
    rusqlite::Connection::open(&db_path)
        .expect("create")
        .execute_batch("CREATE TABLE unrelated (x INTEGER);")
        .expect("schema");

    let reporter = CountingReporter::default();
    let data = FlightDataBuilder::new()
        .with_database_uri(Some(db_path.to_str().expect("utf-8 path")))
        .with_reporter(Box::new(reporter.clone()))
        .build()
        .expect("an empty schema still opens");

    let err = data
        .try_flight_by_id(&FlightById { flight_id: 1 })
        .expect_err("missing table is an execution error");
    assert_eq!(err.kind(), flightdata_core::ErrorKind::Execution);
    assert_eq!(reporter.count(), 0, "try_ operations do not report");

    assert!(data.flight_by_id(&FlightById { flight_id: 1 }).is_empty());
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_records_serialize_with_upper_case_fields() {
    let (_temp_dir, data) = create_test_flight_data();

    let flights = data.flight_by_id(&FlightById { flight_id: 1 });
    let json = serde_json::to_value(&flights).expect("serializes");

    assert_eq!(
        json,
        serde_json::json!([{
            "ID": 1,
            "ORIGIN_AIRPORT": "JFK",
            "DESTINATION_AIRPORT": "LAX",
            "AIRLINE": "Delta",
            "DELAY": 15
        }])
    );
}
