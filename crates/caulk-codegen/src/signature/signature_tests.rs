#![allow(non_snake_case)]

use super::*;

fn resize() -> Signature {
    Signature {
        return_type: "void".into(),
        name: "caulk_Widget_Resize".into(),
        receiver: Some("Widget".into()),
        params: vec![
            SignatureParam {
                name: "w".into(),
                ty: "int".into(),
            },
            SignatureParam {
                name: "h".into(),
                ty: "int".into(),
            },
        ],
    }
}

#[test]
fn Signature___public___keeps_types_unqualified() {
    let rendered = resize().render(RenderContext::Public, &BridgeRules::default());

    assert_eq!(rendered, "void caulk_Widget_Resize(Widget* __THIS, int w, int h)");
}

#[test]
fn Signature___bridge___qualifies_receiver() {
    let rendered = resize().render(RenderContext::Bridge, &BridgeRules::default());

    assert_eq!(
        rendered,
        "void caulk_Widget_Resize(caulk::Widget* __THIS, int w, int h)"
    );
}

#[test]
fn Signature___no_receiver_no_params___renders_empty_list() {
    let signature = Signature {
        return_type: "ISteamUser*".into(),
        name: "caulk_SteamUser".into(),
        receiver: None,
        params: Vec::new(),
    };

    assert_eq!(
        signature.render(RenderContext::Public, &BridgeRules::default()),
        "ISteamUser* caulk_SteamUser()"
    );
    assert_eq!(
        signature.render(RenderContext::Bridge, &BridgeRules::default()),
        "caulk::ISteamUser* caulk_SteamUser()"
    );
}

#[test]
fn Signature___bridge___qualifies_return_and_params() {
    let signature = Signature {
        return_type: "CSteamID".into(),
        name: "caulk_SteamFriends_GetFriendByIndex".into(),
        receiver: None,
        params: vec![
            SignatureParam {
                name: "iFriend".into(),
                ty: "int".into(),
            },
            SignatureParam {
                name: "identity".into(),
                ty: "const SteamNetworkingIdentity *".into(),
            },
        ],
    };

    assert_eq!(
        signature.render(RenderContext::Bridge, &BridgeRules::default()),
        "caulk::CSteamID caulk_SteamFriends_GetFriendByIndex(int iFriend, \
         const caulk::SteamNetworkingIdentity * identity)"
    );
}

#[test]
fn Signature___public___never_contains_namespace() {
    let signature = Signature {
        return_type: "HSteamPipe".into(),
        name: "caulk_Thing".into(),
        receiver: Some("ISteamClient".into()),
        params: vec![SignatureParam {
            name: "pipe".into(),
            ty: "HSteamPipe".into(),
        }],
    };

    let rendered = signature.render(RenderContext::Public, &BridgeRules::default());

    assert!(!rendered.contains("caulk::"));
}
