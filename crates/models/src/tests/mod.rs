/// Entity CRUD against an in-memory database
pub mod crud_tests;
