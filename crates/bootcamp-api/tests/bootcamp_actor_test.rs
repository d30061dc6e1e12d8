use bootcamp_api::bootcamp_actor::{self, BootcampContext, BootcampError};
use bootcamp_api::clients::{BootcampClient, CourseClient};
use bootcamp_api::geocoder::TableGeocoder;
use bootcamp_api::model::{BootcampCreate, Career, Course, UserId};
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};
use std::sync::Arc;

fn create_params() -> BootcampCreate {
    BootcampCreate {
        name: "Devworks Bootcamp".to_string(),
        description: "Intensive full stack training".to_string(),
        website: None,
        email: None,
        phone: None,
        address: "Boston, MA 02215".to_string(),
        careers: vec![Career::WebDevelopment],
        average_rating: None,
        average_cost: None,
        housing: false,
        job_assistance: false,
        job_guarantee: false,
        accept_gi: false,
        user: Some(UserId(1)),
    }
}

/// Real Bootcamp actor with a mocked Course dependency. Exercises the
/// cascade in `on_delete` without spawning a course actor.
///
/// Pattern 2: Actor + Mocks
/// - Real Bootcamp actor (create pipeline, delete hook)
/// - Mocked Course client (isolates the cascade call)
#[tokio::test]
async fn test_cascade_delete_with_mocked_courses() {
    let mut course_mock = MockClient::<Course>::new();

    // on_delete bulk-deletes the bootcamp's courses; report two removed.
    course_mock.expect_delete_many().return_ok(2);

    let course_client = CourseClient::new(course_mock.client());

    let (actor, generic_client) = bootcamp_actor::new();
    let bootcamp_client = BootcampClient::new(generic_client);
    let actor_handle = tokio::spawn(actor.run(BootcampContext {
        geocoder: Arc::new(TableGeocoder::seeded()),
        courses: course_client,
    }));

    let id = bootcamp_client
        .create_bootcamp(create_params())
        .await
        .expect("Failed to create bootcamp");

    bootcamp_client
        .delete(id)
        .await
        .expect("Failed to delete bootcamp");
    assert!(bootcamp_client.get(id).await.unwrap().is_none());

    course_mock.verify();

    drop(bootcamp_client);
    actor_handle.await.unwrap();
}

/// A failing cascade aborts the removal: the bootcamp must still be
/// retrievable afterwards, and the error surfaces as a cascade failure.
#[tokio::test]
async fn test_failed_cascade_aborts_bootcamp_delete() {
    let mut course_mock = MockClient::<Course>::new();
    course_mock
        .expect_delete_many()
        .return_err(FrameworkError::ActorClosed);

    let course_client = CourseClient::new(course_mock.client());

    let (actor, generic_client) = bootcamp_actor::new();
    let bootcamp_client = BootcampClient::new(generic_client);
    let actor_handle = tokio::spawn(actor.run(BootcampContext {
        geocoder: Arc::new(TableGeocoder::seeded()),
        courses: course_client,
    }));

    let id = bootcamp_client
        .create_bootcamp(create_params())
        .await
        .unwrap();

    let result = bootcamp_client.delete(id).await;
    assert!(matches!(result, Err(BootcampError::CascadeFailed(_))));

    // The bootcamp survives the failed delete.
    assert!(bootcamp_client.get(id).await.unwrap().is_some());

    course_mock.verify();

    drop(bootcamp_client);
    actor_handle.await.unwrap();
}

/// A provider failure during the create pipeline surfaces as a geocoding
/// error and no courses are ever consulted.
#[tokio::test]
async fn test_geocoding_failure_surfaces_as_domain_error() {
    let course_mock = MockClient::<Course>::new();
    let course_client = CourseClient::new(course_mock.client());

    // Empty table: every address misses.
    let (actor, generic_client) = bootcamp_actor::new();
    let bootcamp_client = BootcampClient::new(generic_client);
    let actor_handle = tokio::spawn(actor.run(BootcampContext {
        geocoder: Arc::new(TableGeocoder::new()),
        courses: course_client,
    }));

    let result = bootcamp_client.create_bootcamp(create_params()).await;
    assert!(matches!(
        result,
        Err(BootcampError::GeocodingFailed { .. })
    ));

    course_mock.verify();

    drop(bootcamp_client);
    actor_handle.await.unwrap();
}
