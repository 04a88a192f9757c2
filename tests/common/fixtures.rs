use docpage::{HeadingEntry, Page};
use serde_json::json;

/// The bare page: title, body and nothing optional.
pub fn minimal_page() -> Page {
    serde_json::from_value(json!({
        "title": "Foo",
        "path": "/docs/foo",
        "headings": [],
        "body": "# Hi",
        "repo": "",
        "cordova": "",
        "package": "",
        "platforms": [],
        "codeUsage": null
    }))
    .expect("valid fixture")
}

/// A page with every optional section present.
pub fn full_page() -> Page {
    Page {
        headings: vec![HeadingEntry::new("Overview", "#overview")],
        body: "## Overview\n\nThis plugin does **things**.".into(),
        repo: Some("https://github.com/apache/cordova-plugin-x".into()),
        cordova: Some("cordova-plugin-x".into()),
        package: Some("@ionic-native/x".into()),
        platforms: vec!["Android".into(), "Browser".into(), "iOS".into()],
        code_usage: Some("```typescript\nimport { X } from '@ionic-native/x/ngx';\n```".into()),
        ..Page::new("X", "/docs/native/x")
    }
}
