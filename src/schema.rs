//! Table definitions, applied by [`Store`](crate::Store) when it connects.
//!
//! SQLite does not enforce `VARCHAR(n)` limits on its own, so every bounded
//! column carries an explicit `CHECK` on its length. Foreign keys are turned
//! on per connection (see the connect options in `store`). No cascade rules:
//! deleting a user with dependent rows fails the foreign key check.

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE CHECK (length(email) <= 120),
    password TEXT NOT NULL,
    is_active BOOLEAN NOT NULL
)";

const CREATE_POSTS: &str = "\
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users (id),
    title TEXT NOT NULL CHECK (length(title) <= 200),
    image_url TEXT NOT NULL CHECK (length(image_url) <= 500)
)";

const CREATE_COMMENTS: &str = "\
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users (id),
    post_id INTEGER NOT NULL REFERENCES posts (id),
    text TEXT NOT NULL CHECK (length(text) <= 300)
)";

// No uniqueness on (follower_id, followed_id): the API has always accepted
// duplicate follow edges and some consumers count on the insert never
// conflicting.
const CREATE_FOLLOWERS: &str = "\
CREATE TABLE IF NOT EXISTS followers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    followed_id INTEGER NOT NULL REFERENCES users (id),
    follower_id INTEGER NOT NULL REFERENCES users (id)
)";

const CREATE_MESSAGES: &str = "\
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sender_id INTEGER NOT NULL REFERENCES users (id),
    receiver_id INTEGER NOT NULL REFERENCES users (id),
    content TEXT NOT NULL CHECK (length(content) <= 500)
)";

pub(crate) const TABLES: [&str; 5] = [
    CREATE_USERS,
    CREATE_POSTS,
    CREATE_COMMENTS,
    CREATE_FOLLOWERS,
    CREATE_MESSAGES,
];
