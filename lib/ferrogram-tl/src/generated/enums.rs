// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One `enum` per boxed schema type. The boxed form serializes the
//! constructor identifier before the bare body, and dispatches on it
//! while deserializing.
use crate::deserialize::{Buffer, Error, Result};
use crate::{types, Deserializable, Identifiable, Serializable};

macro_rules! impl_boxed {
    ($enum_name:ident { $($variant:ident => $ty:path),+ $(,)? }) => {
        impl Serializable for $enum_name {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                match self {
                    $(
                        Self::$variant(x) => {
                            <$ty>::CONSTRUCTOR_ID.serialize(buf);
                            x.serialize(buf);
                        }
                    )+
                }
            }
        }

        impl Deserializable for $enum_name {
            fn deserialize(buf: Buffer) -> Result<Self> {
                let id = u32::deserialize(buf)?;
                $(
                    if id == <$ty>::CONSTRUCTOR_ID {
                        return Ok(Self::$variant(<$ty>::deserialize(buf)?));
                    }
                )+
                Err(Error::UnexpectedConstructor { id })
            }
        }
    };
}

/// The boxed type `ResPQ`.
#[derive(Clone, Debug, PartialEq)]
pub enum ResPq {
    Pq(types::ResPq),
}
impl_boxed!(ResPq { Pq => types::ResPq });

/// The boxed type `P_Q_inner_data`.
#[derive(Clone, Debug, PartialEq)]
pub enum PQInnerData {
    Data(types::PQInnerData),
    Temp(types::PQInnerDataTemp),
}
impl_boxed!(PQInnerData {
    Data => types::PQInnerData,
    Temp => types::PQInnerDataTemp,
});

/// The boxed type `Server_DH_Params`.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerDhParams {
    Ok(types::ServerDhParamsOk),
    Fail(types::ServerDhParamsFail),
}
impl_boxed!(ServerDhParams {
    Ok => types::ServerDhParamsOk,
    Fail => types::ServerDhParamsFail,
});

/// The boxed type `Server_DH_inner_data`.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerDhInnerData {
    Data(types::ServerDhInnerData),
}
impl_boxed!(ServerDhInnerData { Data => types::ServerDhInnerData });

/// The boxed type `Client_DH_Inner_Data`.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientDhInnerData {
    Data(types::ClientDhInnerData),
}
impl_boxed!(ClientDhInnerData { Data => types::ClientDhInnerData });

/// The boxed type `Set_client_DH_params_answer`.
#[derive(Clone, Debug, PartialEq)]
pub enum SetClientDhParamsAnswer {
    DhGenOk(types::DhGenOk),
    DhGenRetry(types::DhGenRetry),
    DhGenFail(types::DhGenFail),
}
impl_boxed!(SetClientDhParamsAnswer {
    DhGenOk => types::DhGenOk,
    DhGenRetry => types::DhGenRetry,
    DhGenFail => types::DhGenFail,
});

/// The boxed type `BindAuthKeyInner`.
#[derive(Clone, Debug, PartialEq)]
pub enum BindAuthKeyInner {
    Inner(types::BindAuthKeyInner),
}
impl_boxed!(BindAuthKeyInner { Inner => types::BindAuthKeyInner });

/// The boxed type `RpcDropAnswer`.
#[derive(Clone, Debug, PartialEq)]
pub enum RpcDropAnswer {
    Unknown(types::RpcAnswerUnknown),
    DroppedRunning(types::RpcAnswerDroppedRunning),
    Dropped(types::RpcAnswerDropped),
}
impl_boxed!(RpcDropAnswer {
    Unknown => types::RpcAnswerUnknown,
    DroppedRunning => types::RpcAnswerDroppedRunning,
    Dropped => types::RpcAnswerDropped,
});

/// The boxed type `FutureSalts`.
#[derive(Clone, Debug, PartialEq)]
pub enum FutureSalts {
    Salts(types::FutureSalts),
}
impl_boxed!(FutureSalts { Salts => types::FutureSalts });

/// The boxed type `Pong`.
#[derive(Clone, Debug, PartialEq)]
pub enum Pong {
    Pong(types::Pong),
}
impl_boxed!(Pong { Pong => types::Pong });

/// The boxed type `DestroySessionRes`.
#[derive(Clone, Debug, PartialEq)]
pub enum DestroySessionRes {
    Ok(types::DestroySessionOk),
    None(types::DestroySessionNone),
}
impl_boxed!(DestroySessionRes {
    Ok => types::DestroySessionOk,
    None => types::DestroySessionNone,
});

/// The boxed type `NewSession`.
#[derive(Clone, Debug, PartialEq)]
pub enum NewSession {
    Created(types::NewSessionCreated),
}
impl_boxed!(NewSession { Created => types::NewSessionCreated });

/// The boxed type `MsgsAck`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsAck {
    Ack(types::MsgsAck),
}
impl_boxed!(MsgsAck { Ack => types::MsgsAck });

/// The boxed type `BadMsgNotification`.
#[derive(Clone, Debug, PartialEq)]
pub enum BadMsgNotification {
    Notification(types::BadMsgNotification),
    BadServerSalt(types::BadServerSalt),
}
impl_boxed!(BadMsgNotification {
    Notification => types::BadMsgNotification,
    BadServerSalt => types::BadServerSalt,
});

/// The boxed type `MsgsStateReq`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsStateReq {
    Req(types::MsgsStateReq),
}
impl_boxed!(MsgsStateReq { Req => types::MsgsStateReq });

/// The boxed type `MsgsStateInfo`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsStateInfo {
    Info(types::MsgsStateInfo),
}
impl_boxed!(MsgsStateInfo { Info => types::MsgsStateInfo });

/// The boxed type `MsgsAllInfo`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsAllInfo {
    Info(types::MsgsAllInfo),
}
impl_boxed!(MsgsAllInfo { Info => types::MsgsAllInfo });

/// The boxed type `MsgDetailedInfo`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgDetailedInfo {
    Info(types::MsgDetailedInfo),
    New(types::MsgNewDetailedInfo),
}
impl_boxed!(MsgDetailedInfo {
    Info => types::MsgDetailedInfo,
    New => types::MsgNewDetailedInfo,
});

/// The boxed type `MsgResendReq`.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgResendReq {
    Req(types::MsgResendReq),
}
impl_boxed!(MsgResendReq { Req => types::MsgResendReq });

/// The boxed type `HttpWait`.
#[derive(Clone, Debug, PartialEq)]
pub enum HttpWait {
    Wait(types::HttpWait),
}
impl_boxed!(HttpWait { Wait => types::HttpWait });

/// The boxed type `DcOption`.
#[derive(Clone, Debug, PartialEq)]
pub enum DcOption {
    Option(types::DcOption),
}
impl_boxed!(DcOption { Option => types::DcOption });

/// The boxed type `DisabledFeature`.
#[derive(Clone, Debug, PartialEq)]
pub enum DisabledFeature {
    Feature(types::DisabledFeature),
}
impl_boxed!(DisabledFeature { Feature => types::DisabledFeature });

/// The boxed type `Config`.
#[derive(Clone, Debug, PartialEq)]
pub enum Config {
    Config(types::Config),
}
impl_boxed!(Config { Config => types::Config });

/// The boxed type `Peer`.
#[derive(Clone, Debug, PartialEq)]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}
impl_boxed!(Peer {
    User => types::PeerUser,
    Chat => types::PeerChat,
    Channel => types::PeerChannel,
});

/// The boxed type `InputUser`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputUser {
    Empty(types::InputUserEmpty),
    UserSelf(types::InputUserSelf),
    User(types::InputUser),
}
impl_boxed!(InputUser {
    Empty => types::InputUserEmpty,
    UserSelf => types::InputUserSelf,
    User => types::InputUser,
});

/// The boxed type `InputChannel`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputChannel {
    Empty(types::InputChannelEmpty),
    Channel(types::InputChannel),
}
impl_boxed!(InputChannel {
    Empty => types::InputChannelEmpty,
    Channel => types::InputChannel,
});

/// The boxed type `InputEncryptedChat`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEncryptedChat {
    Chat(types::InputEncryptedChat),
}
impl_boxed!(InputEncryptedChat { Chat => types::InputEncryptedChat });

/// The boxed type `FileLocation`.
#[derive(Clone, Debug, PartialEq)]
pub enum FileLocation {
    Unavailable(types::FileLocationUnavailable),
    Location(types::FileLocation),
}
impl_boxed!(FileLocation {
    Unavailable => types::FileLocationUnavailable,
    Location => types::FileLocation,
});

/// The boxed type `UserProfilePhoto`.
#[derive(Clone, Debug, PartialEq)]
pub enum UserProfilePhoto {
    Empty(types::UserProfilePhotoEmpty),
    Photo(types::UserProfilePhoto),
}
impl_boxed!(UserProfilePhoto {
    Empty => types::UserProfilePhotoEmpty,
    Photo => types::UserProfilePhoto,
});

/// The boxed type `UserStatus`.
#[derive(Clone, Debug, PartialEq)]
pub enum UserStatus {
    Empty(types::UserStatusEmpty),
    Online(types::UserStatusOnline),
    Offline(types::UserStatusOffline),
    Recently(types::UserStatusRecently),
    LastWeek(types::UserStatusLastWeek),
    LastMonth(types::UserStatusLastMonth),
}
impl_boxed!(UserStatus {
    Empty => types::UserStatusEmpty,
    Online => types::UserStatusOnline,
    Offline => types::UserStatusOffline,
    Recently => types::UserStatusRecently,
    LastWeek => types::UserStatusLastWeek,
    LastMonth => types::UserStatusLastMonth,
});

/// The boxed type `User`.
#[derive(Clone, Debug, PartialEq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}
impl_boxed!(User {
    Empty => types::UserEmpty,
    User => types::User,
});

/// The boxed type `ChatPhoto`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatPhoto {
    Empty(types::ChatPhotoEmpty),
    Photo(types::ChatPhoto),
}
impl_boxed!(ChatPhoto {
    Empty => types::ChatPhotoEmpty,
    Photo => types::ChatPhoto,
});

/// The boxed type `Chat`.
#[derive(Clone, Debug, PartialEq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}
impl_boxed!(Chat {
    Empty => types::ChatEmpty,
    Chat => types::Chat,
    Forbidden => types::ChatForbidden,
    Channel => types::Channel,
    ChannelForbidden => types::ChannelForbidden,
});

/// The boxed type `ChatParticipant`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatParticipant {
    Participant(types::ChatParticipant),
    Creator(types::ChatParticipantCreator),
    Admin(types::ChatParticipantAdmin),
}
impl_boxed!(ChatParticipant {
    Participant => types::ChatParticipant,
    Creator => types::ChatParticipantCreator,
    Admin => types::ChatParticipantAdmin,
});

/// The boxed type `ChatParticipants`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatParticipants {
    Forbidden(types::ChatParticipantsForbidden),
    Participants(types::ChatParticipants),
}
impl_boxed!(ChatParticipants {
    Forbidden => types::ChatParticipantsForbidden,
    Participants => types::ChatParticipants,
});

/// The boxed type `GeoPoint`.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoPoint {
    Empty(types::GeoPointEmpty),
    Point(types::GeoPoint),
}
impl_boxed!(GeoPoint {
    Empty => types::GeoPointEmpty,
    Point => types::GeoPoint,
});

/// The boxed type `PhotoSize`.
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoSize {
    Empty(types::PhotoSizeEmpty),
    Size(types::PhotoSize),
    Cached(types::PhotoCachedSize),
}
impl_boxed!(PhotoSize {
    Empty => types::PhotoSizeEmpty,
    Size => types::PhotoSize,
    Cached => types::PhotoCachedSize,
});

/// The boxed type `Photo`.
#[derive(Clone, Debug, PartialEq)]
pub enum Photo {
    Empty(types::PhotoEmpty),
    Photo(types::Photo),
}
impl_boxed!(Photo {
    Empty => types::PhotoEmpty,
    Photo => types::Photo,
});

/// The boxed type `InputStickerSet`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputStickerSet {
    Empty(types::InputStickerSetEmpty),
    Id(types::InputStickerSetId),
    ShortName(types::InputStickerSetShortName),
}
impl_boxed!(InputStickerSet {
    Empty => types::InputStickerSetEmpty,
    Id => types::InputStickerSetId,
    ShortName => types::InputStickerSetShortName,
});

/// The boxed type `DocumentAttribute`.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentAttribute {
    ImageSize(types::DocumentAttributeImageSize),
    Animated(types::DocumentAttributeAnimated),
    Sticker(types::DocumentAttributeSticker),
    Video(types::DocumentAttributeVideo),
    Audio(types::DocumentAttributeAudio),
    Filename(types::DocumentAttributeFilename),
    HasStickers(types::DocumentAttributeHasStickers),
}
impl_boxed!(DocumentAttribute {
    ImageSize => types::DocumentAttributeImageSize,
    Animated => types::DocumentAttributeAnimated,
    Sticker => types::DocumentAttributeSticker,
    Video => types::DocumentAttributeVideo,
    Audio => types::DocumentAttributeAudio,
    Filename => types::DocumentAttributeFilename,
    HasStickers => types::DocumentAttributeHasStickers,
});

/// The boxed type `Document`.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Empty(types::DocumentEmpty),
    Document(types::Document),
}
impl_boxed!(Document {
    Empty => types::DocumentEmpty,
    Document => types::Document,
});

/// The boxed type `WebPage`.
#[derive(Clone, Debug, PartialEq)]
pub enum WebPage {
    Empty(types::WebPageEmpty),
    Pending(types::WebPagePending),
    Page(types::WebPage),
}
impl_boxed!(WebPage {
    Empty => types::WebPageEmpty,
    Pending => types::WebPagePending,
    Page => types::WebPage,
});

/// The boxed type `MessageEntity`.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageEntity {
    Unknown(types::MessageEntityUnknown),
    Mention(types::MessageEntityMention),
    Hashtag(types::MessageEntityHashtag),
    BotCommand(types::MessageEntityBotCommand),
    Url(types::MessageEntityUrl),
    Email(types::MessageEntityEmail),
    Bold(types::MessageEntityBold),
    Italic(types::MessageEntityItalic),
    Code(types::MessageEntityCode),
    Pre(types::MessageEntityPre),
    TextUrl(types::MessageEntityTextUrl),
    MentionName(types::MessageEntityMentionName),
}
impl_boxed!(MessageEntity {
    Unknown => types::MessageEntityUnknown,
    Mention => types::MessageEntityMention,
    Hashtag => types::MessageEntityHashtag,
    BotCommand => types::MessageEntityBotCommand,
    Url => types::MessageEntityUrl,
    Email => types::MessageEntityEmail,
    Bold => types::MessageEntityBold,
    Italic => types::MessageEntityItalic,
    Code => types::MessageEntityCode,
    Pre => types::MessageEntityPre,
    TextUrl => types::MessageEntityTextUrl,
    MentionName => types::MessageEntityMentionName,
});

/// The boxed type `KeyboardButton`.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyboardButton {
    Button(types::KeyboardButton),
}
impl_boxed!(KeyboardButton { Button => types::KeyboardButton });

/// The boxed type `KeyboardButtonRow`.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyboardButtonRow {
    Row(types::KeyboardButtonRow),
}
impl_boxed!(KeyboardButtonRow { Row => types::KeyboardButtonRow });

/// The boxed type `ReplyMarkup`.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyMarkup {
    Hide(types::ReplyKeyboardHide),
    ForceReply(types::ReplyKeyboardForceReply),
    Markup(types::ReplyKeyboardMarkup),
}
impl_boxed!(ReplyMarkup {
    Hide => types::ReplyKeyboardHide,
    ForceReply => types::ReplyKeyboardForceReply,
    Markup => types::ReplyKeyboardMarkup,
});

/// The boxed type `MessageMedia`.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageMedia {
    Empty(types::MessageMediaEmpty),
    Photo(types::MessageMediaPhoto),
    Geo(types::MessageMediaGeo),
    Contact(types::MessageMediaContact),
    Unsupported(types::MessageMediaUnsupported),
    Document(types::MessageMediaDocument),
    WebPage(types::MessageMediaWebPage),
    Venue(types::MessageMediaVenue),
}
impl_boxed!(MessageMedia {
    Empty => types::MessageMediaEmpty,
    Photo => types::MessageMediaPhoto,
    Geo => types::MessageMediaGeo,
    Contact => types::MessageMediaContact,
    Unsupported => types::MessageMediaUnsupported,
    Document => types::MessageMediaDocument,
    WebPage => types::MessageMediaWebPage,
    Venue => types::MessageMediaVenue,
});

/// The boxed type `MessageAction`.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageAction {
    Empty(types::MessageActionEmpty),
    ChatCreate(types::MessageActionChatCreate),
    ChatEditTitle(types::MessageActionChatEditTitle),
    ChatEditPhoto(types::MessageActionChatEditPhoto),
    ChatDeletePhoto(types::MessageActionChatDeletePhoto),
    ChatAddUser(types::MessageActionChatAddUser),
    ChatDeleteUser(types::MessageActionChatDeleteUser),
    ChatJoinedByLink(types::MessageActionChatJoinedByLink),
    ChannelCreate(types::MessageActionChannelCreate),
    ChatMigrateTo(types::MessageActionChatMigrateTo),
    ChannelMigrateFrom(types::MessageActionChannelMigrateFrom),
    PinMessage(types::MessageActionPinMessage),
    HistoryClear(types::MessageActionHistoryClear),
}
impl_boxed!(MessageAction {
    Empty => types::MessageActionEmpty,
    ChatCreate => types::MessageActionChatCreate,
    ChatEditTitle => types::MessageActionChatEditTitle,
    ChatEditPhoto => types::MessageActionChatEditPhoto,
    ChatDeletePhoto => types::MessageActionChatDeletePhoto,
    ChatAddUser => types::MessageActionChatAddUser,
    ChatDeleteUser => types::MessageActionChatDeleteUser,
    ChatJoinedByLink => types::MessageActionChatJoinedByLink,
    ChannelCreate => types::MessageActionChannelCreate,
    ChatMigrateTo => types::MessageActionChatMigrateTo,
    ChannelMigrateFrom => types::MessageActionChannelMigrateFrom,
    PinMessage => types::MessageActionPinMessage,
    HistoryClear => types::MessageActionHistoryClear,
});

/// The boxed type `MessageFwdHeader`.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageFwdHeader {
    Header(types::MessageFwdHeader),
}
impl_boxed!(MessageFwdHeader { Header => types::MessageFwdHeader });

/// The boxed type `Message`.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}
impl_boxed!(Message {
    Empty => types::MessageEmpty,
    Message => types::Message,
    Service => types::MessageService,
});

/// The boxed type `SendMessageAction`.
#[derive(Clone, Debug, PartialEq)]
pub enum SendMessageAction {
    Typing(types::SendMessageTypingAction),
    Cancel(types::SendMessageCancelAction),
    RecordVideo(types::SendMessageRecordVideoAction),
    UploadVideo(types::SendMessageUploadVideoAction),
    RecordAudio(types::SendMessageRecordAudioAction),
    UploadAudio(types::SendMessageUploadAudioAction),
    UploadPhoto(types::SendMessageUploadPhotoAction),
    UploadDocument(types::SendMessageUploadDocumentAction),
    GeoLocation(types::SendMessageGeoLocationAction),
    ChooseContact(types::SendMessageChooseContactAction),
}
impl_boxed!(SendMessageAction {
    Typing => types::SendMessageTypingAction,
    Cancel => types::SendMessageCancelAction,
    RecordVideo => types::SendMessageRecordVideoAction,
    UploadVideo => types::SendMessageUploadVideoAction,
    RecordAudio => types::SendMessageRecordAudioAction,
    UploadAudio => types::SendMessageUploadAudioAction,
    UploadPhoto => types::SendMessageUploadPhotoAction,
    UploadDocument => types::SendMessageUploadDocumentAction,
    GeoLocation => types::SendMessageGeoLocationAction,
    ChooseContact => types::SendMessageChooseContactAction,
});

/// The boxed type `NotifyPeer`.
#[derive(Clone, Debug, PartialEq)]
pub enum NotifyPeer {
    Peer(types::NotifyPeer),
    Users(types::NotifyUsers),
    Chats(types::NotifyChats),
    All(types::NotifyAll),
}
impl_boxed!(NotifyPeer {
    Peer => types::NotifyPeer,
    Users => types::NotifyUsers,
    Chats => types::NotifyChats,
    All => types::NotifyAll,
});

/// The boxed type `PeerNotifySettings`.
#[derive(Clone, Debug, PartialEq)]
pub enum PeerNotifySettings {
    Empty(types::PeerNotifySettingsEmpty),
    Settings(types::PeerNotifySettings),
}
impl_boxed!(PeerNotifySettings {
    Empty => types::PeerNotifySettingsEmpty,
    Settings => types::PeerNotifySettings,
});

/// The boxed type `EncryptedChat`.
#[derive(Clone, Debug, PartialEq)]
pub enum EncryptedChat {
    Empty(types::EncryptedChatEmpty),
    Waiting(types::EncryptedChatWaiting),
    Requested(types::EncryptedChatRequested),
    Chat(types::EncryptedChat),
    Discarded(types::EncryptedChatDiscarded),
}
impl_boxed!(EncryptedChat {
    Empty => types::EncryptedChatEmpty,
    Waiting => types::EncryptedChatWaiting,
    Requested => types::EncryptedChatRequested,
    Chat => types::EncryptedChat,
    Discarded => types::EncryptedChatDiscarded,
});

/// The boxed type `EncryptedFile`.
#[derive(Clone, Debug, PartialEq)]
pub enum EncryptedFile {
    Empty(types::EncryptedFileEmpty),
    File(types::EncryptedFile),
}
impl_boxed!(EncryptedFile {
    Empty => types::EncryptedFileEmpty,
    File => types::EncryptedFile,
});

/// The boxed type `EncryptedMessage`.
#[derive(Clone, Debug, PartialEq)]
pub enum EncryptedMessage {
    Message(types::EncryptedMessage),
    Service(types::EncryptedMessageService),
}
impl_boxed!(EncryptedMessage {
    Message => types::EncryptedMessage,
    Service => types::EncryptedMessageService,
});

/// The boxed type `MessageRange`.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageRange {
    Range(types::MessageRange),
}
impl_boxed!(MessageRange { Range => types::MessageRange });

/// The boxed type `ChannelMessagesFilter`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelMessagesFilter {
    Empty(types::ChannelMessagesFilterEmpty),
    Filter(types::ChannelMessagesFilter),
}
impl_boxed!(ChannelMessagesFilter {
    Empty => types::ChannelMessagesFilterEmpty,
    Filter => types::ChannelMessagesFilter,
});

/// The boxed type `Update`.
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    NewMessage(types::UpdateNewMessage),
    MessageId(types::UpdateMessageId),
    DeleteMessages(types::UpdateDeleteMessages),
    UserTyping(types::UpdateUserTyping),
    ChatUserTyping(types::UpdateChatUserTyping),
    ChatParticipants(types::UpdateChatParticipants),
    UserStatus(types::UpdateUserStatus),
    UserName(types::UpdateUserName),
    UserPhoto(types::UpdateUserPhoto),
    NewEncryptedMessage(types::UpdateNewEncryptedMessage),
    EncryptedChatTyping(types::UpdateEncryptedChatTyping),
    Encryption(types::UpdateEncryption),
    EncryptedMessagesRead(types::UpdateEncryptedMessagesRead),
    ChatParticipantAdd(types::UpdateChatParticipantAdd),
    ChatParticipantDelete(types::UpdateChatParticipantDelete),
    DcOptions(types::UpdateDcOptions),
    NotifySettings(types::UpdateNotifySettings),
    ReadHistoryInbox(types::UpdateReadHistoryInbox),
    ReadHistoryOutbox(types::UpdateReadHistoryOutbox),
    WebPage(types::UpdateWebPage),
    ReadMessagesContents(types::UpdateReadMessagesContents),
    ChannelTooLong(types::UpdateChannelTooLong),
    Channel(types::UpdateChannel),
    NewChannelMessage(types::UpdateNewChannelMessage),
    ReadChannelInbox(types::UpdateReadChannelInbox),
    DeleteChannelMessages(types::UpdateDeleteChannelMessages),
    ChannelMessageViews(types::UpdateChannelMessageViews),
}
impl_boxed!(Update {
    NewMessage => types::UpdateNewMessage,
    MessageId => types::UpdateMessageId,
    DeleteMessages => types::UpdateDeleteMessages,
    UserTyping => types::UpdateUserTyping,
    ChatUserTyping => types::UpdateChatUserTyping,
    ChatParticipants => types::UpdateChatParticipants,
    UserStatus => types::UpdateUserStatus,
    UserName => types::UpdateUserName,
    UserPhoto => types::UpdateUserPhoto,
    NewEncryptedMessage => types::UpdateNewEncryptedMessage,
    EncryptedChatTyping => types::UpdateEncryptedChatTyping,
    Encryption => types::UpdateEncryption,
    EncryptedMessagesRead => types::UpdateEncryptedMessagesRead,
    ChatParticipantAdd => types::UpdateChatParticipantAdd,
    ChatParticipantDelete => types::UpdateChatParticipantDelete,
    DcOptions => types::UpdateDcOptions,
    NotifySettings => types::UpdateNotifySettings,
    ReadHistoryInbox => types::UpdateReadHistoryInbox,
    ReadHistoryOutbox => types::UpdateReadHistoryOutbox,
    WebPage => types::UpdateWebPage,
    ReadMessagesContents => types::UpdateReadMessagesContents,
    ChannelTooLong => types::UpdateChannelTooLong,
    Channel => types::UpdateChannel,
    NewChannelMessage => types::UpdateNewChannelMessage,
    ReadChannelInbox => types::UpdateReadChannelInbox,
    DeleteChannelMessages => types::UpdateDeleteChannelMessages,
    ChannelMessageViews => types::UpdateChannelMessageViews,
});

/// The boxed type `Updates`.
#[derive(Clone, Debug, PartialEq)]
pub enum Updates {
    TooLong(types::UpdatesTooLong),
    UpdateShortMessage(types::UpdateShortMessage),
    UpdateShortChatMessage(types::UpdateShortChatMessage),
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    UpdateShortSentMessage(types::UpdateShortSentMessage),
}
impl_boxed!(Updates {
    TooLong => types::UpdatesTooLong,
    UpdateShortMessage => types::UpdateShortMessage,
    UpdateShortChatMessage => types::UpdateShortChatMessage,
    UpdateShort => types::UpdateShort,
    Combined => types::UpdatesCombined,
    Updates => types::Updates,
    UpdateShortSentMessage => types::UpdateShortSentMessage,
});

pub mod auth {
    use crate::deserialize::{Buffer, Error, Result};
    use crate::{types, Deserializable, Identifiable, Serializable};

    /// The boxed type `auth.SentCode`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum SentCode {
        Code(types::auth::SentCode),
        AppCode(types::auth::SentAppCode),
    }
    impl_boxed!(SentCode {
        Code => types::auth::SentCode,
        AppCode => types::auth::SentAppCode,
    });

    /// The boxed type `auth.Authorization`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Authorization {
        Authorization(types::auth::Authorization),
    }
    impl_boxed!(Authorization { Authorization => types::auth::Authorization });

    /// The boxed type `auth.ExportedAuthorization`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum ExportedAuthorization {
        Exported(types::auth::ExportedAuthorization),
    }
    impl_boxed!(ExportedAuthorization { Exported => types::auth::ExportedAuthorization });
}

pub mod account {
    use crate::deserialize::{Buffer, Error, Result};
    use crate::{types, Deserializable, Identifiable, Serializable};

    /// The boxed type `account.Password`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Password {
        NoPassword(types::account::NoPassword),
        Password(types::account::Password),
    }
    impl_boxed!(Password {
        NoPassword => types::account::NoPassword,
        Password => types::account::Password,
    });
}

pub mod updates {
    use crate::deserialize::{Buffer, Error, Result};
    use crate::{types, Deserializable, Identifiable, Serializable};

    /// The boxed type `updates.State`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum State {
        State(types::updates::State),
    }
    impl_boxed!(State { State => types::updates::State });

    /// The boxed type `updates.Difference`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Difference {
        Empty(types::updates::DifferenceEmpty),
        Difference(types::updates::Difference),
        Slice(types::updates::DifferenceSlice),
    }
    impl_boxed!(Difference {
        Empty => types::updates::DifferenceEmpty,
        Difference => types::updates::Difference,
        Slice => types::updates::DifferenceSlice,
    });

    /// The boxed type `updates.ChannelDifference`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum ChannelDifference {
        Empty(types::updates::ChannelDifferenceEmpty),
        TooLong(types::updates::ChannelDifferenceTooLong),
        Difference(types::updates::ChannelDifference),
    }
    impl_boxed!(ChannelDifference {
        Empty => types::updates::ChannelDifferenceEmpty,
        TooLong => types::updates::ChannelDifferenceTooLong,
        Difference => types::updates::ChannelDifference,
    });
}

pub mod messages {
    use crate::deserialize::{Buffer, Error, Result};
    use crate::{types, Deserializable, Identifiable, Serializable};

    /// The boxed type `messages.DhConfig`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum DhConfig {
        NotModified(types::messages::DhConfigNotModified),
        Config(types::messages::DhConfig),
    }
    impl_boxed!(DhConfig {
        NotModified => types::messages::DhConfigNotModified,
        Config => types::messages::DhConfig,
    });

    /// The boxed type `messages.SentEncryptedMessage`.
    #[derive(Clone, Debug, PartialEq)]
    pub enum SentEncryptedMessage {
        Message(types::messages::SentEncryptedMessage),
        File(types::messages::SentEncryptedFile),
    }
    impl_boxed!(SentEncryptedMessage {
        Message => types::messages::SentEncryptedMessage,
        File => types::messages::SentEncryptedFile,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deserializable, Serializable};

    #[test]
    fn boxed_round_trip_keeps_constructor() {
        let peer = Peer::User(types::PeerUser { user_id: 7 });
        let bytes = peer.to_bytes();
        assert_eq!(&bytes[..4], &0x9db1bc6du32.to_le_bytes());
        assert_eq!(Peer::from_bytes(&bytes).unwrap(), peer);
    }

    #[test]
    fn unknown_constructor_is_reported() {
        let data = 0xdeadbeefu32.to_le_bytes();
        assert_eq!(
            Peer::from_bytes(&data),
            Err(crate::deserialize::Error::UnexpectedConstructor { id: 0xdeadbeef })
        );
    }

    #[test]
    fn flagged_update_round_trips() {
        let update = Update::ChannelTooLong(types::UpdateChannelTooLong {
            channel_id: 44,
            pts: Some(120),
        });
        assert_eq!(Update::from_bytes(&update.to_bytes()).unwrap(), update);

        let update = Update::ChannelTooLong(types::UpdateChannelTooLong {
            channel_id: 44,
            pts: None,
        });
        assert_eq!(Update::from_bytes(&update.to_bytes()).unwrap(), update);
    }
}
