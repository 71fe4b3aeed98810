//! Groups: `/groups/*` routes.

use super::{parse_fields, Room};
use crate::client::GitterClient;
use crate::error::Result;
use crate::resource::{client_args, ClientArgs, Collectable, Collection, Parent, Record};
use crate::transport::QueryParams;
use serde::Deserialize;
use serde_json::Value;

/// Security descriptor: the object a group takes its permissions from.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BackedBy {
    #[serde(rename = "type")]
    kind: Option<String>,
    link_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupFields {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    backed_by: Option<BackedBy>,
}

/// A group (organisation or community) owning rooms.
#[derive(Clone, Debug)]
pub struct Group {
    record: Record,
    fields: GroupFields,
}

impl Group {
    /// Build a group from a raw record.
    pub fn new(client: GitterClient, data: Value) -> Result<Self> {
        let fields: GroupFields = parse_fields("group", &data)?;
        Ok(Group {
            record: Record::new(client, data),
            fields,
        })
    }

    /// Group id.
    pub fn id(&self) -> &str {
        &self.fields.id
    }

    /// Group name.
    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    /// Group URI.
    pub fn uri(&self) -> Option<&str> {
        self.fields.uri.as_deref()
    }

    /// Base avatar URL.
    pub fn avatar_url(&self) -> Option<&str> {
        self.fields.avatar_url.as_deref()
    }

    /// Kind of backing object: `ONE_TO_ONE`, `GH_REPO`, `GH_ORG` or `GH_USER`.
    pub fn backed_by_type(&self) -> Option<&str> {
        self.fields.backed_by.as_ref()?.kind.as_deref()
    }

    /// Path locating the backing object.
    pub fn backed_by_link_path(&self) -> Option<&str> {
        self.fields.backed_by.as_ref()?.link_path.as_deref()
    }

    /// Rooms of the group.
    pub async fn rooms(&self) -> Result<Collection<Room>> {
        let route = format!("/groups/{}/rooms", self.id());
        let data = self.client().get(&route, &QueryParams::new()).await?;
        Collection::new(self.clone(), data)
    }

    /// Client that fetched this group.
    pub fn client(&self) -> &GitterClient {
        self.record.client()
    }
}

impl AsRef<Record> for Group {
    fn as_ref(&self) -> &Record {
        &self.record
    }
}

impl Parent for Group {
    fn client(&self) -> &GitterClient {
        self.record.client()
    }
}

impl Collectable for Group {
    type Args = ClientArgs;

    fn collectable_args(parent: &dyn Parent, record: Value) -> Self::Args {
        client_args(parent, record)
    }

    fn from_args((client, record): Self::Args) -> Result<Self> {
        Group::new(client, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use serde_json::json;
    use url::Url;

    fn client() -> GitterClient {
        let config = SessionConfig {
            base_url: Url::parse("http://localhost:5000").unwrap(),
            path_prefix: "/v1".into(),
            verify_tls: true,
            request_timeout: None,
        };
        GitterClient::with_config("token", config).unwrap()
    }

    #[test]
    fn test_group_fields() {
        let group = Group::new(
            client(),
            json!({
                "id": "57542c12c43b8c601976fa66",
                "name": "gitterHQ",
                "uri": "gitterHQ",
                "backedBy": {"type": "GH_ORG", "linkPath": "gitterHQ"},
                "avatarUrl": "https://avatars.example/group/57542c12"
            }),
        )
        .unwrap();

        assert_eq!(group.id(), "57542c12c43b8c601976fa66");
        assert_eq!(group.name(), Some("gitterHQ"));
        assert_eq!(group.backed_by_type(), Some("GH_ORG"));
        assert_eq!(group.backed_by_link_path(), Some("gitterHQ"));
    }

    #[test]
    fn test_group_without_backing_object() {
        let group = Group::new(client(), json!({"id": "1", "backedBy": null})).unwrap();
        assert_eq!(group.backed_by_type(), None);
        assert_eq!(group.backed_by_link_path(), None);
    }
}
