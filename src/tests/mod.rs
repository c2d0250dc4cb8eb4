//! Small linear programs shared by the unit tests.
