#[cfg(test)]
mod tests {
    use crate::app_system::{DirectorySystem, Settings};
    use crate::clients::StudentClient;
    use crate::directory::DirectoryClient;
    use crate::domain::{Student, StudentCreate, StudentField};
    use crate::mock_framework::{create_mock_client, expect_create, expect_delete, expect_list};
    use crate::student_actor::{StudentError, ValidationError, ValidationReason};

    fn student(id: u64, name: &str) -> Student {
        Student {
            id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "1".into(),
        }
    }

    async fn unseeded() -> DirectorySystem {
        DirectorySystem::start(&Settings::default().without_seed()).await.unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_create_and_reject() {
        let system = unseeded().await;
        let client = system.student_client.clone();

        let created = client
            .create_student(StudentCreate::new("X", "x@x.com", "1"))
            .await
            .unwrap();
        let students = client.list_students().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 1);
        assert_eq!(students[0], created);

        let err = client
            .create_student(StudentCreate::new("", "x@x.com", "1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StudentError::ValidationError(ValidationError::new(StudentField::Name, ValidationReason::Empty))
        );
        assert_eq!(client.list_students().await.unwrap().len(), 1);

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_and_are_not_reused() {
        let system = unseeded().await;
        let client = &system.student_client;

        let a = client.create_student(StudentCreate::new("A", "a@a.com", "1")).await.unwrap();
        let b = client.create_student(StudentCreate::new("B", "b@b.com", "2")).await.unwrap();
        client.delete_student(b.id).await.unwrap();
        let c = client.create_student(StudentCreate::new("C", "c@c.com", "3")).await.unwrap();

        assert!(a.id < b.id && b.id < c.id);
        let ids: Vec<u64> = client.list_students().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn test_create_leaves_prior_records_untouched() {
        let system = DirectorySystem::start(&Settings::default()).await.unwrap();
        let client = &system.student_client;
        let before = client.list_students().await.unwrap();

        let created = client
            .create_student(StudentCreate::new("Ann", "ann@example.com", "42"))
            .await
            .unwrap();
        let after = client.list_students().await.unwrap();

        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.iter().filter(|s| **s == created).count(), 1);
        assert_eq!(after.len(), before.len() + 1);
    }

    #[tokio::test]
    async fn test_delete_missing_and_repeated() {
        let system = DirectorySystem::start(&Settings::default()).await.unwrap();
        let client = &system.student_client;
        let before = client.list_students().await.unwrap();

        client.delete_student(999).await.unwrap();
        assert_eq!(client.list_students().await.unwrap(), before);

        client.delete_student(2).await.unwrap();
        let after = client.list_students().await.unwrap();
        assert!(after.iter().all(|s| s.id != 2));
        client.delete_student(2).await.unwrap();
        assert_eq!(client.list_students().await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_directory_register_search_remove() {
        let system = unseeded().await;
        let mut directory = system.directory();

        directory.register(StudentCreate::new("Ann", "ann@school.org", "555")).await.unwrap();
        directory.register(StudentCreate::new("Bob", "bob@school.org", "777")).await.unwrap();
        assert_eq!(directory.view().visible_count(), 2);

        directory.search(StudentField::Name, "an");
        let names: Vec<&str> = directory.view().visible().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ann"]);

        directory.remove(1).await.unwrap();
        assert_eq!(directory.view().visible_count(), 0);
        assert_eq!(directory.view().students().len(), 1);
    }

    #[tokio::test]
    async fn test_register_blocks_invalid_candidate_without_request() {
        let (inner, mut receiver) = create_mock_client::<Student>(10);
        let mut directory = DirectoryClient::new(StudentClient::new(inner));

        let err = directory
            .register(StudentCreate::new("Ann", "not-an-email", "1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StudentError::ValidationError(ValidationError::new(StudentField::Email, ValidationReason::InvalidEmail))
        );
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_register_flows_create_then_list() {
        let (inner, mut receiver) = create_mock_client::<Student>(10);
        let mut directory = DirectoryClient::new(StudentClient::new(inner));

        let task = tokio::spawn(async move {
            let result = directory
                .register(StudentCreate::new("Ann", "ann@example.com", "1"))
                .await;
            (directory, result)
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.name, "Ann");
        responder.send(Ok(student(1, "Ann"))).unwrap();

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder.send(Ok(vec![student(1, "Ann")])).unwrap();

        let (directory, result) = task.await.unwrap();
        assert_eq!(result.unwrap().id, 1);
        assert_eq!(directory.view().students(), &[student(1, "Ann")]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_local_records() {
        let (inner, mut receiver) = create_mock_client::<Student>(10);
        let mut directory = DirectoryClient::new(StudentClient::new(inner));

        let task = tokio::spawn(async move {
            directory.refresh().await.unwrap();
            let removed = directory.remove(1).await;
            (directory, removed)
        });

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder.send(Ok(vec![student(1, "Ann"), student(2, "Bob")])).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete");
        assert_eq!(id, 1);
        responder.send(Ok(true)).unwrap();

        // Drop the pending list request's responder to simulate a lost actor.
        let responder = expect_list(&mut receiver).await.expect("Expected List");
        drop(responder);

        let (directory, removed) = task.await.unwrap();
        assert_eq!(removed, Ok(()));
        assert_eq!(directory.view().students().len(), 2);
    }

    #[tokio::test]
    async fn test_register_succeeds_when_refresh_fails_after_create() {
        let (inner, mut receiver) = create_mock_client::<Student>(10);
        let mut directory = DirectoryClient::new(StudentClient::new(inner));

        let task = tokio::spawn(async move {
            let result = directory
                .register(StudentCreate::new("Ann", "ann@example.com", "1"))
                .await;
            (directory, result)
        });

        let (_, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        responder.send(Ok(student(1, "Ann"))).unwrap();

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        drop(responder);

        let (directory, result) = task.await.unwrap();
        assert_eq!(result, Ok(student(1, "Ann")));
        assert!(directory.view().students().is_empty());
        assert!(receiver.try_recv().is_err());
    }
}
