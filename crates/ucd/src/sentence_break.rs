// Generated from the Unicode Character Database 15.1.0 (SentenceBreakProperty.txt).
// Do not edit by hand, regenerate from the source data instead.

// Values: AT = 0, CR = 1, CL = 2, EX = 3, FO = 4, LF = 5, LO = 6, NU = 7, LE = 8, SC = 9, ST = 10, SE = 11, SP = 12, UP = 13

pub const SENTENCE_BREAK: &[(u32, u32, u8)] = &[
    (0x0009, 0x0009, 12),
    (0x000A, 0x000A, 5),
    (0x000B, 0x000C, 12),
    (0x000D, 0x000D, 1),
    (0x0020, 0x0020, 12),
    (0x0021, 0x0021, 10),
    (0x0022, 0x0022, 2),
    (0x0027, 0x0029, 2),
    (0x002C, 0x002D, 9),
    (0x002E, 0x002E, 0),
    (0x0030, 0x0039, 7),
    (0x003A, 0x003A, 9),
    (0x003F, 0x003F, 10),
    (0x0041, 0x005A, 13),
    (0x005B, 0x005B, 2),
    (0x005D, 0x005D, 2),
    (0x0061, 0x007A, 6),
    (0x007B, 0x007B, 2),
    (0x007D, 0x007D, 2),
    (0x0085, 0x0085, 11),
    (0x00A0, 0x00A0, 12),
    (0x00AA, 0x00AA, 6),
    (0x00AB, 0x00AB, 2),
    (0x00AD, 0x00AD, 4),
    (0x00B5, 0x00B5, 6),
    (0x00BA, 0x00BA, 6),
    (0x00BB, 0x00BB, 2),
    (0x00C0, 0x00D6, 13),
    (0x00D8, 0x00DE, 13),
    (0x00DF, 0x00F6, 6),
    (0x00F8, 0x00FF, 6),
    (0x0100, 0x0100, 13),
    (0x0101, 0x0101, 6),
    (0x0102, 0x0102, 13),
    (0x0103, 0x0103, 6),
    (0x0104, 0x0104, 13),
    (0x0105, 0x0105, 6),
    (0x0106, 0x0106, 13),
    (0x0107, 0x0107, 6),
    (0x0108, 0x0108, 13),
    (0x0109, 0x0109, 6),
    (0x010A, 0x010A, 13),
    (0x010B, 0x010B, 6),
    (0x010C, 0x010C, 13),
    (0x010D, 0x010D, 6),
    (0x010E, 0x010E, 13),
    (0x010F, 0x010F, 6),
    (0x0110, 0x0110, 13),
    (0x0111, 0x0111, 6),
    (0x0112, 0x0112, 13),
    (0x0113, 0x0113, 6),
    (0x0114, 0x0114, 13),
    (0x0115, 0x0115, 6),
    (0x0116, 0x0116, 13),
    (0x0117, 0x0117, 6),
    (0x0118, 0x0118, 13),
    (0x0119, 0x0119, 6),
    (0x011A, 0x011A, 13),
    (0x011B, 0x011B, 6),
    (0x011C, 0x011C, 13),
    (0x011D, 0x011D, 6),
    (0x011E, 0x011E, 13),
    (0x011F, 0x011F, 6),
    (0x0120, 0x0120, 13),
    (0x0121, 0x0121, 6),
    (0x0122, 0x0122, 13),
    (0x0123, 0x0123, 6),
    (0x0124, 0x0124, 13),
    (0x0125, 0x0125, 6),
    (0x0126, 0x0126, 13),
    (0x0127, 0x0127, 6),
    (0x0128, 0x0128, 13),
    (0x0129, 0x0129, 6),
    (0x012A, 0x012A, 13),
    (0x012B, 0x012B, 6),
    (0x012C, 0x012C, 13),
    (0x012D, 0x012D, 6),
    (0x012E, 0x012E, 13),
    (0x012F, 0x012F, 6),
    (0x0130, 0x0130, 13),
    (0x0131, 0x0131, 6),
    (0x0132, 0x0132, 13),
    (0x0133, 0x0133, 6),
    (0x0134, 0x0134, 13),
    (0x0135, 0x0135, 6),
    (0x0136, 0x0136, 13),
    (0x0137, 0x0138, 6),
    (0x0139, 0x0139, 13),
    (0x013A, 0x013A, 6),
    (0x013B, 0x013B, 13),
    (0x013C, 0x013C, 6),
    (0x013D, 0x013D, 13),
    (0x013E, 0x013E, 6),
    (0x013F, 0x013F, 13),
    (0x0140, 0x0140, 6),
    (0x0141, 0x0141, 13),
    (0x0142, 0x0142, 6),
    (0x0143, 0x0143, 13),
    (0x0144, 0x0144, 6),
    (0x0145, 0x0145, 13),
    (0x0146, 0x0146, 6),
    (0x0147, 0x0147, 13),
    (0x0148, 0x0149, 6),
    (0x014A, 0x014A, 13),
    (0x014B, 0x014B, 6),
    (0x014C, 0x014C, 13),
    (0x014D, 0x014D, 6),
    (0x014E, 0x014E, 13),
    (0x014F, 0x014F, 6),
    (0x0150, 0x0150, 13),
    (0x0151, 0x0151, 6),
    (0x0152, 0x0152, 13),
    (0x0153, 0x0153, 6),
    (0x0154, 0x0154, 13),
    (0x0155, 0x0155, 6),
    (0x0156, 0x0156, 13),
    (0x0157, 0x0157, 6),
    (0x0158, 0x0158, 13),
    (0x0159, 0x0159, 6),
    (0x015A, 0x015A, 13),
    (0x015B, 0x015B, 6),
    (0x015C, 0x015C, 13),
    (0x015D, 0x015D, 6),
    (0x015E, 0x015E, 13),
    (0x015F, 0x015F, 6),
    (0x0160, 0x0160, 13),
    (0x0161, 0x0161, 6),
    (0x0162, 0x0162, 13),
    (0x0163, 0x0163, 6),
    (0x0164, 0x0164, 13),
    (0x0165, 0x0165, 6),
    (0x0166, 0x0166, 13),
    (0x0167, 0x0167, 6),
    (0x0168, 0x0168, 13),
    (0x0169, 0x0169, 6),
    (0x016A, 0x016A, 13),
    (0x016B, 0x016B, 6),
    (0x016C, 0x016C, 13),
    (0x016D, 0x016D, 6),
    (0x016E, 0x016E, 13),
    (0x016F, 0x016F, 6),
    (0x0170, 0x0170, 13),
    (0x0171, 0x0171, 6),
    (0x0172, 0x0172, 13),
    (0x0173, 0x0173, 6),
    (0x0174, 0x0174, 13),
    (0x0175, 0x0175, 6),
    (0x0176, 0x0176, 13),
    (0x0177, 0x0177, 6),
    (0x0178, 0x0179, 13),
    (0x017A, 0x017A, 6),
    (0x017B, 0x017B, 13),
    (0x017C, 0x017C, 6),
    (0x017D, 0x017D, 13),
    (0x017E, 0x0180, 6),
    (0x0181, 0x0182, 13),
    (0x0183, 0x0183, 6),
    (0x0184, 0x0184, 13),
    (0x0185, 0x0185, 6),
    (0x0186, 0x0187, 13),
    (0x0188, 0x0188, 6),
    (0x0189, 0x018B, 13),
    (0x018C, 0x018D, 6),
    (0x018E, 0x0191, 13),
    (0x0192, 0x0192, 6),
    (0x0193, 0x0194, 13),
    (0x0195, 0x0195, 6),
    (0x0196, 0x0198, 13),
    (0x0199, 0x019B, 6),
    (0x019C, 0x019D, 13),
    (0x019E, 0x019E, 6),
    (0x019F, 0x01A0, 13),
    (0x01A1, 0x01A1, 6),
    (0x01A2, 0x01A2, 13),
    (0x01A3, 0x01A3, 6),
    (0x01A4, 0x01A4, 13),
    (0x01A5, 0x01A5, 6),
    (0x01A6, 0x01A7, 13),
    (0x01A8, 0x01A8, 6),
    (0x01A9, 0x01A9, 13),
    (0x01AA, 0x01AB, 6),
    (0x01AC, 0x01AC, 13),
    (0x01AD, 0x01AD, 6),
    (0x01AE, 0x01AF, 13),
    (0x01B0, 0x01B0, 6),
    (0x01B1, 0x01B3, 13),
    (0x01B4, 0x01B4, 6),
    (0x01B5, 0x01B5, 13),
    (0x01B6, 0x01B6, 6),
    (0x01B7, 0x01B8, 13),
    (0x01B9, 0x01BA, 6),
    (0x01BB, 0x01BB, 8),
    (0x01BC, 0x01BC, 13),
    (0x01BD, 0x01BF, 6),
    (0x01C0, 0x01C3, 8),
    (0x01C4, 0x01C5, 13),
    (0x01C6, 0x01C6, 6),
    (0x01C7, 0x01C8, 13),
    (0x01C9, 0x01C9, 6),
    (0x01CA, 0x01CB, 13),
    (0x01CC, 0x01CC, 6),
    (0x01CD, 0x01CD, 13),
    (0x01CE, 0x01CE, 6),
    (0x01CF, 0x01CF, 13),
    (0x01D0, 0x01D0, 6),
    (0x01D1, 0x01D1, 13),
    (0x01D2, 0x01D2, 6),
    (0x01D3, 0x01D3, 13),
    (0x01D4, 0x01D4, 6),
    (0x01D5, 0x01D5, 13),
    (0x01D6, 0x01D6, 6),
    (0x01D7, 0x01D7, 13),
    (0x01D8, 0x01D8, 6),
    (0x01D9, 0x01D9, 13),
    (0x01DA, 0x01DA, 6),
    (0x01DB, 0x01DB, 13),
    (0x01DC, 0x01DD, 6),
    (0x01DE, 0x01DE, 13),
    (0x01DF, 0x01DF, 6),
    (0x01E0, 0x01E0, 13),
    (0x01E1, 0x01E1, 6),
    (0x01E2, 0x01E2, 13),
    (0x01E3, 0x01E3, 6),
    (0x01E4, 0x01E4, 13),
    (0x01E5, 0x01E5, 6),
    (0x01E6, 0x01E6, 13),
    (0x01E7, 0x01E7, 6),
    (0x01E8, 0x01E8, 13),
    (0x01E9, 0x01E9, 6),
    (0x01EA, 0x01EA, 13),
    (0x01EB, 0x01EB, 6),
    (0x01EC, 0x01EC, 13),
    (0x01ED, 0x01ED, 6),
    (0x01EE, 0x01EE, 13),
    (0x01EF, 0x01F0, 6),
    (0x01F1, 0x01F2, 13),
    (0x01F3, 0x01F3, 6),
    (0x01F4, 0x01F4, 13),
    (0x01F5, 0x01F5, 6),
    (0x01F6, 0x01F8, 13),
    (0x01F9, 0x01F9, 6),
    (0x01FA, 0x01FA, 13),
    (0x01FB, 0x01FB, 6),
    (0x01FC, 0x01FC, 13),
    (0x01FD, 0x01FD, 6),
    (0x01FE, 0x01FE, 13),
    (0x01FF, 0x01FF, 6),
    (0x0200, 0x0200, 13),
    (0x0201, 0x0201, 6),
    (0x0202, 0x0202, 13),
    (0x0203, 0x0203, 6),
    (0x0204, 0x0204, 13),
    (0x0205, 0x0205, 6),
    (0x0206, 0x0206, 13),
    (0x0207, 0x0207, 6),
    (0x0208, 0x0208, 13),
    (0x0209, 0x0209, 6),
    (0x020A, 0x020A, 13),
    (0x020B, 0x020B, 6),
    (0x020C, 0x020C, 13),
    (0x020D, 0x020D, 6),
    (0x020E, 0x020E, 13),
    (0x020F, 0x020F, 6),
    (0x0210, 0x0210, 13),
    (0x0211, 0x0211, 6),
    (0x0212, 0x0212, 13),
    (0x0213, 0x0213, 6),
    (0x0214, 0x0214, 13),
    (0x0215, 0x0215, 6),
    (0x0216, 0x0216, 13),
    (0x0217, 0x0217, 6),
    (0x0218, 0x0218, 13),
    (0x0219, 0x0219, 6),
    (0x021A, 0x021A, 13),
    (0x021B, 0x021B, 6),
    (0x021C, 0x021C, 13),
    (0x021D, 0x021D, 6),
    (0x021E, 0x021E, 13),
    (0x021F, 0x021F, 6),
    (0x0220, 0x0220, 13),
    (0x0221, 0x0221, 6),
    (0x0222, 0x0222, 13),
    (0x0223, 0x0223, 6),
    (0x0224, 0x0224, 13),
    (0x0225, 0x0225, 6),
    (0x0226, 0x0226, 13),
    (0x0227, 0x0227, 6),
    (0x0228, 0x0228, 13),
    (0x0229, 0x0229, 6),
    (0x022A, 0x022A, 13),
    (0x022B, 0x022B, 6),
    (0x022C, 0x022C, 13),
    (0x022D, 0x022D, 6),
    (0x022E, 0x022E, 13),
    (0x022F, 0x022F, 6),
    (0x0230, 0x0230, 13),
    (0x0231, 0x0231, 6),
    (0x0232, 0x0232, 13),
    (0x0233, 0x0239, 6),
    (0x023A, 0x023B, 13),
    (0x023C, 0x023C, 6),
    (0x023D, 0x023E, 13),
    (0x023F, 0x0240, 6),
    (0x0241, 0x0241, 13),
    (0x0242, 0x0242, 6),
    (0x0243, 0x0246, 13),
    (0x0247, 0x0247, 6),
    (0x0248, 0x0248, 13),
    (0x0249, 0x0249, 6),
    (0x024A, 0x024A, 13),
    (0x024B, 0x024B, 6),
    (0x024C, 0x024C, 13),
    (0x024D, 0x024D, 6),
    (0x024E, 0x024E, 13),
    (0x024F, 0x0293, 6),
    (0x0294, 0x0294, 8),
    (0x0295, 0x02B8, 6),
    (0x02B9, 0x02BF, 8),
    (0x02C0, 0x02C1, 6),
    (0x02C6, 0x02D1, 8),
    (0x02E0, 0x02E4, 6),
    (0x02EC, 0x02EC, 8),
    (0x02EE, 0x02EE, 8),
    (0x0300, 0x036F, 3),
    (0x0370, 0x0370, 13),
    (0x0371, 0x0371, 6),
    (0x0372, 0x0372, 13),
    (0x0373, 0x0373, 6),
    (0x0374, 0x0374, 8),
    (0x0376, 0x0376, 13),
    (0x0377, 0x0377, 6),
    (0x037A, 0x037D, 6),
    (0x037F, 0x037F, 13),
    (0x0386, 0x0386, 13),
    (0x0388, 0x038A, 13),
    (0x038C, 0x038C, 13),
    (0x038E, 0x038F, 13),
    (0x0390, 0x0390, 6),
    (0x0391, 0x03A1, 13),
    (0x03A3, 0x03AB, 13),
    (0x03AC, 0x03CE, 6),
    (0x03CF, 0x03CF, 13),
    (0x03D0, 0x03D1, 6),
    (0x03D2, 0x03D4, 13),
    (0x03D5, 0x03D7, 6),
    (0x03D8, 0x03D8, 13),
    (0x03D9, 0x03D9, 6),
    (0x03DA, 0x03DA, 13),
    (0x03DB, 0x03DB, 6),
    (0x03DC, 0x03DC, 13),
    (0x03DD, 0x03DD, 6),
    (0x03DE, 0x03DE, 13),
    (0x03DF, 0x03DF, 6),
    (0x03E0, 0x03E0, 13),
    (0x03E1, 0x03E1, 6),
    (0x03E2, 0x03E2, 13),
    (0x03E3, 0x03E3, 6),
    (0x03E4, 0x03E4, 13),
    (0x03E5, 0x03E5, 6),
    (0x03E6, 0x03E6, 13),
    (0x03E7, 0x03E7, 6),
    (0x03E8, 0x03E8, 13),
    (0x03E9, 0x03E9, 6),
    (0x03EA, 0x03EA, 13),
    (0x03EB, 0x03EB, 6),
    (0x03EC, 0x03EC, 13),
    (0x03ED, 0x03ED, 6),
    (0x03EE, 0x03EE, 13),
    (0x03EF, 0x03F3, 6),
    (0x03F4, 0x03F4, 13),
    (0x03F5, 0x03F5, 6),
    (0x03F7, 0x03F7, 13),
    (0x03F8, 0x03F8, 6),
    (0x03F9, 0x03FA, 13),
    (0x03FB, 0x03FC, 6),
    (0x03FD, 0x042F, 13),
    (0x0430, 0x045F, 6),
    (0x0460, 0x0460, 13),
    (0x0461, 0x0461, 6),
    (0x0462, 0x0462, 13),
    (0x0463, 0x0463, 6),
    (0x0464, 0x0464, 13),
    (0x0465, 0x0465, 6),
    (0x0466, 0x0466, 13),
    (0x0467, 0x0467, 6),
    (0x0468, 0x0468, 13),
    (0x0469, 0x0469, 6),
    (0x046A, 0x046A, 13),
    (0x046B, 0x046B, 6),
    (0x046C, 0x046C, 13),
    (0x046D, 0x046D, 6),
    (0x046E, 0x046E, 13),
    (0x046F, 0x046F, 6),
    (0x0470, 0x0470, 13),
    (0x0471, 0x0471, 6),
    (0x0472, 0x0472, 13),
    (0x0473, 0x0473, 6),
    (0x0474, 0x0474, 13),
    (0x0475, 0x0475, 6),
    (0x0476, 0x0476, 13),
    (0x0477, 0x0477, 6),
    (0x0478, 0x0478, 13),
    (0x0479, 0x0479, 6),
    (0x047A, 0x047A, 13),
    (0x047B, 0x047B, 6),
    (0x047C, 0x047C, 13),
    (0x047D, 0x047D, 6),
    (0x047E, 0x047E, 13),
    (0x047F, 0x047F, 6),
    (0x0480, 0x0480, 13),
    (0x0481, 0x0481, 6),
    (0x0483, 0x0489, 3),
    (0x048A, 0x048A, 13),
    (0x048B, 0x048B, 6),
    (0x048C, 0x048C, 13),
    (0x048D, 0x048D, 6),
    (0x048E, 0x048E, 13),
    (0x048F, 0x048F, 6),
    (0x0490, 0x0490, 13),
    (0x0491, 0x0491, 6),
    (0x0492, 0x0492, 13),
    (0x0493, 0x0493, 6),
    (0x0494, 0x0494, 13),
    (0x0495, 0x0495, 6),
    (0x0496, 0x0496, 13),
    (0x0497, 0x0497, 6),
    (0x0498, 0x0498, 13),
    (0x0499, 0x0499, 6),
    (0x049A, 0x049A, 13),
    (0x049B, 0x049B, 6),
    (0x049C, 0x049C, 13),
    (0x049D, 0x049D, 6),
    (0x049E, 0x049E, 13),
    (0x049F, 0x049F, 6),
    (0x04A0, 0x04A0, 13),
    (0x04A1, 0x04A1, 6),
    (0x04A2, 0x04A2, 13),
    (0x04A3, 0x04A3, 6),
    (0x04A4, 0x04A4, 13),
    (0x04A5, 0x04A5, 6),
    (0x04A6, 0x04A6, 13),
    (0x04A7, 0x04A7, 6),
    (0x04A8, 0x04A8, 13),
    (0x04A9, 0x04A9, 6),
    (0x04AA, 0x04AA, 13),
    (0x04AB, 0x04AB, 6),
    (0x04AC, 0x04AC, 13),
    (0x04AD, 0x04AD, 6),
    (0x04AE, 0x04AE, 13),
    (0x04AF, 0x04AF, 6),
    (0x04B0, 0x04B0, 13),
    (0x04B1, 0x04B1, 6),
    (0x04B2, 0x04B2, 13),
    (0x04B3, 0x04B3, 6),
    (0x04B4, 0x04B4, 13),
    (0x04B5, 0x04B5, 6),
    (0x04B6, 0x04B6, 13),
    (0x04B7, 0x04B7, 6),
    (0x04B8, 0x04B8, 13),
    (0x04B9, 0x04B9, 6),
    (0x04BA, 0x04BA, 13),
    (0x04BB, 0x04BB, 6),
    (0x04BC, 0x04BC, 13),
    (0x04BD, 0x04BD, 6),
    (0x04BE, 0x04BE, 13),
    (0x04BF, 0x04BF, 6),
    (0x04C0, 0x04C1, 13),
    (0x04C2, 0x04C2, 6),
    (0x04C3, 0x04C3, 13),
    (0x04C4, 0x04C4, 6),
    (0x04C5, 0x04C5, 13),
    (0x04C6, 0x04C6, 6),
    (0x04C7, 0x04C7, 13),
    (0x04C8, 0x04C8, 6),
    (0x04C9, 0x04C9, 13),
    (0x04CA, 0x04CA, 6),
    (0x04CB, 0x04CB, 13),
    (0x04CC, 0x04CC, 6),
    (0x04CD, 0x04CD, 13),
    (0x04CE, 0x04CF, 6),
    (0x04D0, 0x04D0, 13),
    (0x04D1, 0x04D1, 6),
    (0x04D2, 0x04D2, 13),
    (0x04D3, 0x04D3, 6),
    (0x04D4, 0x04D4, 13),
    (0x04D5, 0x04D5, 6),
    (0x04D6, 0x04D6, 13),
    (0x04D7, 0x04D7, 6),
    (0x04D8, 0x04D8, 13),
    (0x04D9, 0x04D9, 6),
    (0x04DA, 0x04DA, 13),
    (0x04DB, 0x04DB, 6),
    (0x04DC, 0x04DC, 13),
    (0x04DD, 0x04DD, 6),
    (0x04DE, 0x04DE, 13),
    (0x04DF, 0x04DF, 6),
    (0x04E0, 0x04E0, 13),
    (0x04E1, 0x04E1, 6),
    (0x04E2, 0x04E2, 13),
    (0x04E3, 0x04E3, 6),
    (0x04E4, 0x04E4, 13),
    (0x04E5, 0x04E5, 6),
    (0x04E6, 0x04E6, 13),
    (0x04E7, 0x04E7, 6),
    (0x04E8, 0x04E8, 13),
    (0x04E9, 0x04E9, 6),
    (0x04EA, 0x04EA, 13),
    (0x04EB, 0x04EB, 6),
    (0x04EC, 0x04EC, 13),
    (0x04ED, 0x04ED, 6),
    (0x04EE, 0x04EE, 13),
    (0x04EF, 0x04EF, 6),
    (0x04F0, 0x04F0, 13),
    (0x04F1, 0x04F1, 6),
    (0x04F2, 0x04F2, 13),
    (0x04F3, 0x04F3, 6),
    (0x04F4, 0x04F4, 13),
    (0x04F5, 0x04F5, 6),
    (0x04F6, 0x04F6, 13),
    (0x04F7, 0x04F7, 6),
    (0x04F8, 0x04F8, 13),
    (0x04F9, 0x04F9, 6),
    (0x04FA, 0x04FA, 13),
    (0x04FB, 0x04FB, 6),
    (0x04FC, 0x04FC, 13),
    (0x04FD, 0x04FD, 6),
    (0x04FE, 0x04FE, 13),
    (0x04FF, 0x04FF, 6),
    (0x0500, 0x0500, 13),
    (0x0501, 0x0501, 6),
    (0x0502, 0x0502, 13),
    (0x0503, 0x0503, 6),
    (0x0504, 0x0504, 13),
    (0x0505, 0x0505, 6),
    (0x0506, 0x0506, 13),
    (0x0507, 0x0507, 6),
    (0x0508, 0x0508, 13),
    (0x0509, 0x0509, 6),
    (0x050A, 0x050A, 13),
    (0x050B, 0x050B, 6),
    (0x050C, 0x050C, 13),
    (0x050D, 0x050D, 6),
    (0x050E, 0x050E, 13),
    (0x050F, 0x050F, 6),
    (0x0510, 0x0510, 13),
    (0x0511, 0x0511, 6),
    (0x0512, 0x0512, 13),
    (0x0513, 0x0513, 6),
    (0x0514, 0x0514, 13),
    (0x0515, 0x0515, 6),
    (0x0516, 0x0516, 13),
    (0x0517, 0x0517, 6),
    (0x0518, 0x0518, 13),
    (0x0519, 0x0519, 6),
    (0x051A, 0x051A, 13),
    (0x051B, 0x051B, 6),
    (0x051C, 0x051C, 13),
    (0x051D, 0x051D, 6),
    (0x051E, 0x051E, 13),
    (0x051F, 0x051F, 6),
    (0x0520, 0x0520, 13),
    (0x0521, 0x0521, 6),
    (0x0522, 0x0522, 13),
    (0x0523, 0x0523, 6),
    (0x0524, 0x0524, 13),
    (0x0525, 0x0525, 6),
    (0x0526, 0x0526, 13),
    (0x0527, 0x0527, 6),
    (0x0528, 0x0528, 13),
    (0x0529, 0x0529, 6),
    (0x052A, 0x052A, 13),
    (0x052B, 0x052B, 6),
    (0x052C, 0x052C, 13),
    (0x052D, 0x052D, 6),
    (0x052E, 0x052E, 13),
    (0x052F, 0x052F, 6),
    (0x0531, 0x0556, 13),
    (0x0559, 0x0559, 8),
    (0x055D, 0x055D, 9),
    (0x0560, 0x0588, 6),
    (0x0589, 0x0589, 10),
    (0x0591, 0x05BD, 3),
    (0x05BF, 0x05BF, 3),
    (0x05C1, 0x05C2, 3),
    (0x05C4, 0x05C5, 3),
    (0x05C7, 0x05C7, 3),
    (0x05D0, 0x05EA, 8),
    (0x05EF, 0x05F3, 8),
    (0x0600, 0x0605, 7),
    (0x060C, 0x060D, 9),
    (0x0610, 0x061A, 3),
    (0x061C, 0x061C, 4),
    (0x061D, 0x061F, 10),
    (0x0620, 0x064A, 8),
    (0x064B, 0x065F, 3),
    (0x0660, 0x0669, 7),
    (0x066B, 0x066C, 7),
    (0x066E, 0x066F, 8),
    (0x0670, 0x0670, 3),
    (0x0671, 0x06D3, 8),
    (0x06D4, 0x06D4, 10),
    (0x06D5, 0x06D5, 8),
    (0x06D6, 0x06DC, 3),
    (0x06DD, 0x06DD, 7),
    (0x06DF, 0x06E4, 3),
    (0x06E5, 0x06E6, 8),
    (0x06E7, 0x06E8, 3),
    (0x06EA, 0x06ED, 3),
    (0x06EE, 0x06EF, 8),
    (0x06F0, 0x06F9, 7),
    (0x06FA, 0x06FC, 8),
    (0x06FF, 0x06FF, 8),
    (0x0700, 0x0702, 10),
    (0x070F, 0x070F, 4),
    (0x0710, 0x0710, 8),
    (0x0711, 0x0711, 3),
    (0x0712, 0x072F, 8),
    (0x0730, 0x074A, 3),
    (0x074D, 0x07A5, 8),
    (0x07A6, 0x07B0, 3),
    (0x07B1, 0x07B1, 8),
    (0x07C0, 0x07C9, 7),
    (0x07CA, 0x07EA, 8),
    (0x07EB, 0x07F3, 3),
    (0x07F4, 0x07F5, 8),
    (0x07F8, 0x07F8, 9),
    (0x07F9, 0x07F9, 10),
    (0x07FA, 0x07FA, 8),
    (0x07FD, 0x07FD, 3),
    (0x0800, 0x0815, 8),
    (0x0816, 0x0819, 3),
    (0x081A, 0x081A, 8),
    (0x081B, 0x0823, 3),
    (0x0824, 0x0824, 8),
    (0x0825, 0x0827, 3),
    (0x0828, 0x0828, 8),
    (0x0829, 0x082D, 3),
    (0x0837, 0x0837, 10),
    (0x0839, 0x0839, 10),
    (0x083D, 0x083E, 10),
    (0x0840, 0x0858, 8),
    (0x0859, 0x085B, 3),
    (0x0860, 0x086A, 8),
    (0x0870, 0x0887, 8),
    (0x0889, 0x088E, 8),
    (0x0890, 0x0891, 7),
    (0x0898, 0x089F, 3),
    (0x08A0, 0x08C9, 8),
    (0x08CA, 0x08E1, 3),
    (0x08E2, 0x08E2, 7),
    (0x08E3, 0x0903, 3),
    (0x0904, 0x0939, 8),
    (0x093A, 0x093C, 3),
    (0x093D, 0x093D, 8),
    (0x093E, 0x094F, 3),
    (0x0950, 0x0950, 8),
    (0x0951, 0x0957, 3),
    (0x0958, 0x0961, 8),
    (0x0962, 0x0963, 3),
    (0x0964, 0x0965, 10),
    (0x0966, 0x096F, 7),
    (0x0971, 0x0980, 8),
    (0x0981, 0x0983, 3),
    (0x0985, 0x098C, 8),
    (0x098F, 0x0990, 8),
    (0x0993, 0x09A8, 8),
    (0x09AA, 0x09B0, 8),
    (0x09B2, 0x09B2, 8),
    (0x09B6, 0x09B9, 8),
    (0x09BC, 0x09BC, 3),
    (0x09BD, 0x09BD, 8),
    (0x09BE, 0x09C4, 3),
    (0x09C7, 0x09C8, 3),
    (0x09CB, 0x09CD, 3),
    (0x09CE, 0x09CE, 8),
    (0x09D7, 0x09D7, 3),
    (0x09DC, 0x09DD, 8),
    (0x09DF, 0x09E1, 8),
    (0x09E2, 0x09E3, 3),
    (0x09E6, 0x09EF, 7),
    (0x09F0, 0x09F1, 8),
    (0x09FC, 0x09FC, 8),
    (0x09FE, 0x09FE, 3),
    (0x0A01, 0x0A03, 3),
    (0x0A05, 0x0A0A, 8),
    (0x0A0F, 0x0A10, 8),
    (0x0A13, 0x0A28, 8),
    (0x0A2A, 0x0A30, 8),
    (0x0A32, 0x0A33, 8),
    (0x0A35, 0x0A36, 8),
    (0x0A38, 0x0A39, 8),
    (0x0A3C, 0x0A3C, 3),
    (0x0A3E, 0x0A42, 3),
    (0x0A47, 0x0A48, 3),
    (0x0A4B, 0x0A4D, 3),
    (0x0A51, 0x0A51, 3),
    (0x0A59, 0x0A5C, 8),
    (0x0A5E, 0x0A5E, 8),
    (0x0A66, 0x0A6F, 7),
    (0x0A70, 0x0A71, 3),
    (0x0A72, 0x0A74, 8),
    (0x0A75, 0x0A75, 3),
    (0x0A81, 0x0A83, 3),
    (0x0A85, 0x0A8D, 8),
    (0x0A8F, 0x0A91, 8),
    (0x0A93, 0x0AA8, 8),
    (0x0AAA, 0x0AB0, 8),
    (0x0AB2, 0x0AB3, 8),
    (0x0AB5, 0x0AB9, 8),
    (0x0ABC, 0x0ABC, 3),
    (0x0ABD, 0x0ABD, 8),
    (0x0ABE, 0x0AC5, 3),
    (0x0AC7, 0x0AC9, 3),
    (0x0ACB, 0x0ACD, 3),
    (0x0AD0, 0x0AD0, 8),
    (0x0AE0, 0x0AE1, 8),
    (0x0AE2, 0x0AE3, 3),
    (0x0AE6, 0x0AEF, 7),
    (0x0AF9, 0x0AF9, 8),
    (0x0AFA, 0x0AFF, 3),
    (0x0B01, 0x0B03, 3),
    (0x0B05, 0x0B0C, 8),
    (0x0B0F, 0x0B10, 8),
    (0x0B13, 0x0B28, 8),
    (0x0B2A, 0x0B30, 8),
    (0x0B32, 0x0B33, 8),
    (0x0B35, 0x0B39, 8),
    (0x0B3C, 0x0B3C, 3),
    (0x0B3D, 0x0B3D, 8),
    (0x0B3E, 0x0B44, 3),
    (0x0B47, 0x0B48, 3),
    (0x0B4B, 0x0B4D, 3),
    (0x0B55, 0x0B57, 3),
    (0x0B5C, 0x0B5D, 8),
    (0x0B5F, 0x0B61, 8),
    (0x0B62, 0x0B63, 3),
    (0x0B66, 0x0B6F, 7),
    (0x0B71, 0x0B71, 8),
    (0x0B82, 0x0B82, 3),
    (0x0B83, 0x0B83, 8),
    (0x0B85, 0x0B8A, 8),
    (0x0B8E, 0x0B90, 8),
    (0x0B92, 0x0B95, 8),
    (0x0B99, 0x0B9A, 8),
    (0x0B9C, 0x0B9C, 8),
    (0x0B9E, 0x0B9F, 8),
    (0x0BA3, 0x0BA4, 8),
    (0x0BA8, 0x0BAA, 8),
    (0x0BAE, 0x0BB9, 8),
    (0x0BBE, 0x0BC2, 3),
    (0x0BC6, 0x0BC8, 3),
    (0x0BCA, 0x0BCD, 3),
    (0x0BD0, 0x0BD0, 8),
    (0x0BD7, 0x0BD7, 3),
    (0x0BE6, 0x0BEF, 7),
    (0x0C00, 0x0C04, 3),
    (0x0C05, 0x0C0C, 8),
    (0x0C0E, 0x0C10, 8),
    (0x0C12, 0x0C28, 8),
    (0x0C2A, 0x0C39, 8),
    (0x0C3C, 0x0C3C, 3),
    (0x0C3D, 0x0C3D, 8),
    (0x0C3E, 0x0C44, 3),
    (0x0C46, 0x0C48, 3),
    (0x0C4A, 0x0C4D, 3),
    (0x0C55, 0x0C56, 3),
    (0x0C58, 0x0C5A, 8),
    (0x0C5D, 0x0C5D, 8),
    (0x0C60, 0x0C61, 8),
    (0x0C62, 0x0C63, 3),
    (0x0C66, 0x0C6F, 7),
    (0x0C80, 0x0C80, 8),
    (0x0C81, 0x0C83, 3),
    (0x0C85, 0x0C8C, 8),
    (0x0C8E, 0x0C90, 8),
    (0x0C92, 0x0CA8, 8),
    (0x0CAA, 0x0CB3, 8),
    (0x0CB5, 0x0CB9, 8),
    (0x0CBC, 0x0CBC, 3),
    (0x0CBD, 0x0CBD, 8),
    (0x0CBE, 0x0CC4, 3),
    (0x0CC6, 0x0CC8, 3),
    (0x0CCA, 0x0CCD, 3),
    (0x0CD5, 0x0CD6, 3),
    (0x0CDD, 0x0CDE, 8),
    (0x0CE0, 0x0CE1, 8),
    (0x0CE2, 0x0CE3, 3),
    (0x0CE6, 0x0CEF, 7),
    (0x0CF1, 0x0CF2, 8),
    (0x0CF3, 0x0CF3, 3),
    (0x0D00, 0x0D03, 3),
    (0x0D04, 0x0D0C, 8),
    (0x0D0E, 0x0D10, 8),
    (0x0D12, 0x0D3A, 8),
    (0x0D3B, 0x0D3C, 3),
    (0x0D3D, 0x0D3D, 8),
    (0x0D3E, 0x0D44, 3),
    (0x0D46, 0x0D48, 3),
    (0x0D4A, 0x0D4D, 3),
    (0x0D4E, 0x0D4E, 8),
    (0x0D54, 0x0D56, 8),
    (0x0D57, 0x0D57, 3),
    (0x0D5F, 0x0D61, 8),
    (0x0D62, 0x0D63, 3),
    (0x0D66, 0x0D6F, 7),
    (0x0D7A, 0x0D7F, 8),
    (0x0D81, 0x0D83, 3),
    (0x0D85, 0x0D96, 8),
    (0x0D9A, 0x0DB1, 8),
    (0x0DB3, 0x0DBB, 8),
    (0x0DBD, 0x0DBD, 8),
    (0x0DC0, 0x0DC6, 8),
    (0x0DCA, 0x0DCA, 3),
    (0x0DCF, 0x0DD4, 3),
    (0x0DD6, 0x0DD6, 3),
    (0x0DD8, 0x0DDF, 3),
    (0x0DE6, 0x0DEF, 7),
    (0x0DF2, 0x0DF3, 3),
    (0x0E01, 0x0E30, 8),
    (0x0E31, 0x0E31, 3),
    (0x0E32, 0x0E33, 8),
    (0x0E34, 0x0E3A, 3),
    (0x0E40, 0x0E46, 8),
    (0x0E47, 0x0E4E, 3),
    (0x0E50, 0x0E59, 7),
    (0x0E81, 0x0E82, 8),
    (0x0E84, 0x0E84, 8),
    (0x0E86, 0x0E8A, 8),
    (0x0E8C, 0x0EA3, 8),
    (0x0EA5, 0x0EA5, 8),
    (0x0EA7, 0x0EB0, 8),
    (0x0EB1, 0x0EB1, 3),
    (0x0EB2, 0x0EB3, 8),
    (0x0EB4, 0x0EBC, 3),
    (0x0EBD, 0x0EBD, 8),
    (0x0EC0, 0x0EC4, 8),
    (0x0EC6, 0x0EC6, 8),
    (0x0EC8, 0x0ECE, 3),
    (0x0ED0, 0x0ED9, 7),
    (0x0EDC, 0x0EDF, 8),
    (0x0F00, 0x0F00, 8),
    (0x0F18, 0x0F19, 3),
    (0x0F20, 0x0F29, 7),
    (0x0F35, 0x0F35, 3),
    (0x0F37, 0x0F37, 3),
    (0x0F39, 0x0F39, 3),
    (0x0F3A, 0x0F3D, 2),
    (0x0F3E, 0x0F3F, 3),
    (0x0F40, 0x0F47, 8),
    (0x0F49, 0x0F6C, 8),
    (0x0F71, 0x0F84, 3),
    (0x0F86, 0x0F87, 3),
    (0x0F88, 0x0F8C, 8),
    (0x0F8D, 0x0F97, 3),
    (0x0F99, 0x0FBC, 3),
    (0x0FC6, 0x0FC6, 3),
    (0x1000, 0x102A, 8),
    (0x102B, 0x103E, 3),
    (0x103F, 0x103F, 8),
    (0x1040, 0x1049, 7),
    (0x104A, 0x104B, 10),
    (0x1050, 0x1055, 8),
    (0x1056, 0x1059, 3),
    (0x105A, 0x105D, 8),
    (0x105E, 0x1060, 3),
    (0x1061, 0x1061, 8),
    (0x1062, 0x1064, 3),
    (0x1065, 0x1066, 8),
    (0x1067, 0x106D, 3),
    (0x106E, 0x1070, 8),
    (0x1071, 0x1074, 3),
    (0x1075, 0x1081, 8),
    (0x1082, 0x108D, 3),
    (0x108E, 0x108E, 8),
    (0x108F, 0x108F, 3),
    (0x1090, 0x1099, 7),
    (0x109A, 0x109D, 3),
    (0x10A0, 0x10C5, 13),
    (0x10C7, 0x10C7, 13),
    (0x10CD, 0x10CD, 13),
    (0x10D0, 0x10FA, 8),
    (0x10FC, 0x10FC, 6),
    (0x10FD, 0x1248, 8),
    (0x124A, 0x124D, 8),
    (0x1250, 0x1256, 8),
    (0x1258, 0x1258, 8),
    (0x125A, 0x125D, 8),
    (0x1260, 0x1288, 8),
    (0x128A, 0x128D, 8),
    (0x1290, 0x12B0, 8),
    (0x12B2, 0x12B5, 8),
    (0x12B8, 0x12BE, 8),
    (0x12C0, 0x12C0, 8),
    (0x12C2, 0x12C5, 8),
    (0x12C8, 0x12D6, 8),
    (0x12D8, 0x1310, 8),
    (0x1312, 0x1315, 8),
    (0x1318, 0x135A, 8),
    (0x135D, 0x135F, 3),
    (0x1362, 0x1362, 10),
    (0x1367, 0x1368, 10),
    (0x1380, 0x138F, 8),
    (0x13A0, 0x13F5, 13),
    (0x13F8, 0x13FD, 6),
    (0x1401, 0x166C, 8),
    (0x166E, 0x166E, 10),
    (0x166F, 0x167F, 8),
    (0x1680, 0x1680, 12),
    (0x1681, 0x169A, 8),
    (0x169B, 0x169C, 2),
    (0x16A0, 0x16EA, 8),
    (0x16EE, 0x16F8, 8),
    (0x1700, 0x1711, 8),
    (0x1712, 0x1715, 3),
    (0x171F, 0x1731, 8),
    (0x1732, 0x1734, 3),
    (0x1735, 0x1736, 10),
    (0x1740, 0x1751, 8),
    (0x1752, 0x1753, 3),
    (0x1760, 0x176C, 8),
    (0x176E, 0x1770, 8),
    (0x1772, 0x1773, 3),
    (0x1780, 0x17B3, 8),
    (0x17B4, 0x17D3, 3),
    (0x17D4, 0x17D5, 10),
    (0x17D7, 0x17D7, 8),
    (0x17DC, 0x17DC, 8),
    (0x17DD, 0x17DD, 3),
    (0x17E0, 0x17E9, 7),
    (0x1802, 0x1802, 9),
    (0x1803, 0x1803, 10),
    (0x1808, 0x1808, 9),
    (0x1809, 0x1809, 10),
    (0x180B, 0x180D, 3),
    (0x180E, 0x180E, 4),
    (0x180F, 0x180F, 3),
    (0x1810, 0x1819, 7),
    (0x1820, 0x1878, 8),
    (0x1880, 0x1884, 8),
    (0x1885, 0x1886, 3),
    (0x1887, 0x18A8, 8),
    (0x18A9, 0x18A9, 3),
    (0x18AA, 0x18AA, 8),
    (0x18B0, 0x18F5, 8),
    (0x1900, 0x191E, 8),
    (0x1920, 0x192B, 3),
    (0x1930, 0x193B, 3),
    (0x1944, 0x1945, 10),
    (0x1946, 0x194F, 7),
    (0x1950, 0x196D, 8),
    (0x1970, 0x1974, 8),
    (0x1980, 0x19AB, 8),
    (0x19B0, 0x19C9, 8),
    (0x19D0, 0x19D9, 7),
    (0x1A00, 0x1A16, 8),
    (0x1A17, 0x1A1B, 3),
    (0x1A20, 0x1A54, 8),
    (0x1A55, 0x1A5E, 3),
    (0x1A60, 0x1A7C, 3),
    (0x1A7F, 0x1A7F, 3),
    (0x1A80, 0x1A89, 7),
    (0x1A90, 0x1A99, 7),
    (0x1AA7, 0x1AA7, 8),
    (0x1AA8, 0x1AAB, 10),
    (0x1AB0, 0x1ACE, 3),
    (0x1B00, 0x1B04, 3),
    (0x1B05, 0x1B33, 8),
    (0x1B34, 0x1B44, 3),
    (0x1B45, 0x1B4C, 8),
    (0x1B50, 0x1B59, 7),
    (0x1B5A, 0x1B5B, 10),
    (0x1B5E, 0x1B5F, 10),
    (0x1B6B, 0x1B73, 3),
    (0x1B7D, 0x1B7E, 10),
    (0x1B80, 0x1B82, 3),
    (0x1B83, 0x1BA0, 8),
    (0x1BA1, 0x1BAD, 3),
    (0x1BAE, 0x1BAF, 8),
    (0x1BB0, 0x1BB9, 7),
    (0x1BBA, 0x1BE5, 8),
    (0x1BE6, 0x1BF3, 3),
    (0x1C00, 0x1C23, 8),
    (0x1C24, 0x1C37, 3),
    (0x1C3B, 0x1C3C, 10),
    (0x1C40, 0x1C49, 7),
    (0x1C4D, 0x1C4F, 8),
    (0x1C50, 0x1C59, 7),
    (0x1C5A, 0x1C7D, 8),
    (0x1C7E, 0x1C7F, 10),
    (0x1C80, 0x1C88, 6),
    (0x1C90, 0x1CBA, 8),
    (0x1CBD, 0x1CBF, 8),
    (0x1CD0, 0x1CD2, 3),
    (0x1CD4, 0x1CE8, 3),
    (0x1CE9, 0x1CEC, 8),
    (0x1CED, 0x1CED, 3),
    (0x1CEE, 0x1CF3, 8),
    (0x1CF4, 0x1CF4, 3),
    (0x1CF5, 0x1CF6, 8),
    (0x1CF7, 0x1CF9, 3),
    (0x1CFA, 0x1CFA, 8),
    (0x1D00, 0x1DBF, 6),
    (0x1DC0, 0x1DFF, 3),
    (0x1E00, 0x1E00, 13),
    (0x1E01, 0x1E01, 6),
    (0x1E02, 0x1E02, 13),
    (0x1E03, 0x1E03, 6),
    (0x1E04, 0x1E04, 13),
    (0x1E05, 0x1E05, 6),
    (0x1E06, 0x1E06, 13),
    (0x1E07, 0x1E07, 6),
    (0x1E08, 0x1E08, 13),
    (0x1E09, 0x1E09, 6),
    (0x1E0A, 0x1E0A, 13),
    (0x1E0B, 0x1E0B, 6),
    (0x1E0C, 0x1E0C, 13),
    (0x1E0D, 0x1E0D, 6),
    (0x1E0E, 0x1E0E, 13),
    (0x1E0F, 0x1E0F, 6),
    (0x1E10, 0x1E10, 13),
    (0x1E11, 0x1E11, 6),
    (0x1E12, 0x1E12, 13),
    (0x1E13, 0x1E13, 6),
    (0x1E14, 0x1E14, 13),
    (0x1E15, 0x1E15, 6),
    (0x1E16, 0x1E16, 13),
    (0x1E17, 0x1E17, 6),
    (0x1E18, 0x1E18, 13),
    (0x1E19, 0x1E19, 6),
    (0x1E1A, 0x1E1A, 13),
    (0x1E1B, 0x1E1B, 6),
    (0x1E1C, 0x1E1C, 13),
    (0x1E1D, 0x1E1D, 6),
    (0x1E1E, 0x1E1E, 13),
    (0x1E1F, 0x1E1F, 6),
    (0x1E20, 0x1E20, 13),
    (0x1E21, 0x1E21, 6),
    (0x1E22, 0x1E22, 13),
    (0x1E23, 0x1E23, 6),
    (0x1E24, 0x1E24, 13),
    (0x1E25, 0x1E25, 6),
    (0x1E26, 0x1E26, 13),
    (0x1E27, 0x1E27, 6),
    (0x1E28, 0x1E28, 13),
    (0x1E29, 0x1E29, 6),
    (0x1E2A, 0x1E2A, 13),
    (0x1E2B, 0x1E2B, 6),
    (0x1E2C, 0x1E2C, 13),
    (0x1E2D, 0x1E2D, 6),
    (0x1E2E, 0x1E2E, 13),
    (0x1E2F, 0x1E2F, 6),
    (0x1E30, 0x1E30, 13),
    (0x1E31, 0x1E31, 6),
    (0x1E32, 0x1E32, 13),
    (0x1E33, 0x1E33, 6),
    (0x1E34, 0x1E34, 13),
    (0x1E35, 0x1E35, 6),
    (0x1E36, 0x1E36, 13),
    (0x1E37, 0x1E37, 6),
    (0x1E38, 0x1E38, 13),
    (0x1E39, 0x1E39, 6),
    (0x1E3A, 0x1E3A, 13),
    (0x1E3B, 0x1E3B, 6),
    (0x1E3C, 0x1E3C, 13),
    (0x1E3D, 0x1E3D, 6),
    (0x1E3E, 0x1E3E, 13),
    (0x1E3F, 0x1E3F, 6),
    (0x1E40, 0x1E40, 13),
    (0x1E41, 0x1E41, 6),
    (0x1E42, 0x1E42, 13),
    (0x1E43, 0x1E43, 6),
    (0x1E44, 0x1E44, 13),
    (0x1E45, 0x1E45, 6),
    (0x1E46, 0x1E46, 13),
    (0x1E47, 0x1E47, 6),
    (0x1E48, 0x1E48, 13),
    (0x1E49, 0x1E49, 6),
    (0x1E4A, 0x1E4A, 13),
    (0x1E4B, 0x1E4B, 6),
    (0x1E4C, 0x1E4C, 13),
    (0x1E4D, 0x1E4D, 6),
    (0x1E4E, 0x1E4E, 13),
    (0x1E4F, 0x1E4F, 6),
    (0x1E50, 0x1E50, 13),
    (0x1E51, 0x1E51, 6),
    (0x1E52, 0x1E52, 13),
    (0x1E53, 0x1E53, 6),
    (0x1E54, 0x1E54, 13),
    (0x1E55, 0x1E55, 6),
    (0x1E56, 0x1E56, 13),
    (0x1E57, 0x1E57, 6),
    (0x1E58, 0x1E58, 13),
    (0x1E59, 0x1E59, 6),
    (0x1E5A, 0x1E5A, 13),
    (0x1E5B, 0x1E5B, 6),
    (0x1E5C, 0x1E5C, 13),
    (0x1E5D, 0x1E5D, 6),
    (0x1E5E, 0x1E5E, 13),
    (0x1E5F, 0x1E5F, 6),
    (0x1E60, 0x1E60, 13),
    (0x1E61, 0x1E61, 6),
    (0x1E62, 0x1E62, 13),
    (0x1E63, 0x1E63, 6),
    (0x1E64, 0x1E64, 13),
    (0x1E65, 0x1E65, 6),
    (0x1E66, 0x1E66, 13),
    (0x1E67, 0x1E67, 6),
    (0x1E68, 0x1E68, 13),
    (0x1E69, 0x1E69, 6),
    (0x1E6A, 0x1E6A, 13),
    (0x1E6B, 0x1E6B, 6),
    (0x1E6C, 0x1E6C, 13),
    (0x1E6D, 0x1E6D, 6),
    (0x1E6E, 0x1E6E, 13),
    (0x1E6F, 0x1E6F, 6),
    (0x1E70, 0x1E70, 13),
    (0x1E71, 0x1E71, 6),
    (0x1E72, 0x1E72, 13),
    (0x1E73, 0x1E73, 6),
    (0x1E74, 0x1E74, 13),
    (0x1E75, 0x1E75, 6),
    (0x1E76, 0x1E76, 13),
    (0x1E77, 0x1E77, 6),
    (0x1E78, 0x1E78, 13),
    (0x1E79, 0x1E79, 6),
    (0x1E7A, 0x1E7A, 13),
    (0x1E7B, 0x1E7B, 6),
    (0x1E7C, 0x1E7C, 13),
    (0x1E7D, 0x1E7D, 6),
    (0x1E7E, 0x1E7E, 13),
    (0x1E7F, 0x1E7F, 6),
    (0x1E80, 0x1E80, 13),
    (0x1E81, 0x1E81, 6),
    (0x1E82, 0x1E82, 13),
    (0x1E83, 0x1E83, 6),
    (0x1E84, 0x1E84, 13),
    (0x1E85, 0x1E85, 6),
    (0x1E86, 0x1E86, 13),
    (0x1E87, 0x1E87, 6),
    (0x1E88, 0x1E88, 13),
    (0x1E89, 0x1E89, 6),
    (0x1E8A, 0x1E8A, 13),
    (0x1E8B, 0x1E8B, 6),
    (0x1E8C, 0x1E8C, 13),
    (0x1E8D, 0x1E8D, 6),
    (0x1E8E, 0x1E8E, 13),
    (0x1E8F, 0x1E8F, 6),
    (0x1E90, 0x1E90, 13),
    (0x1E91, 0x1E91, 6),
    (0x1E92, 0x1E92, 13),
    (0x1E93, 0x1E93, 6),
    (0x1E94, 0x1E94, 13),
    (0x1E95, 0x1E9D, 6),
    (0x1E9E, 0x1E9E, 13),
    (0x1E9F, 0x1E9F, 6),
    (0x1EA0, 0x1EA0, 13),
    (0x1EA1, 0x1EA1, 6),
    (0x1EA2, 0x1EA2, 13),
    (0x1EA3, 0x1EA3, 6),
    (0x1EA4, 0x1EA4, 13),
    (0x1EA5, 0x1EA5, 6),
    (0x1EA6, 0x1EA6, 13),
    (0x1EA7, 0x1EA7, 6),
    (0x1EA8, 0x1EA8, 13),
    (0x1EA9, 0x1EA9, 6),
    (0x1EAA, 0x1EAA, 13),
    (0x1EAB, 0x1EAB, 6),
    (0x1EAC, 0x1EAC, 13),
    (0x1EAD, 0x1EAD, 6),
    (0x1EAE, 0x1EAE, 13),
    (0x1EAF, 0x1EAF, 6),
    (0x1EB0, 0x1EB0, 13),
    (0x1EB1, 0x1EB1, 6),
    (0x1EB2, 0x1EB2, 13),
    (0x1EB3, 0x1EB3, 6),
    (0x1EB4, 0x1EB4, 13),
    (0x1EB5, 0x1EB5, 6),
    (0x1EB6, 0x1EB6, 13),
    (0x1EB7, 0x1EB7, 6),
    (0x1EB8, 0x1EB8, 13),
    (0x1EB9, 0x1EB9, 6),
    (0x1EBA, 0x1EBA, 13),
    (0x1EBB, 0x1EBB, 6),
    (0x1EBC, 0x1EBC, 13),
    (0x1EBD, 0x1EBD, 6),
    (0x1EBE, 0x1EBE, 13),
    (0x1EBF, 0x1EBF, 6),
    (0x1EC0, 0x1EC0, 13),
    (0x1EC1, 0x1EC1, 6),
    (0x1EC2, 0x1EC2, 13),
    (0x1EC3, 0x1EC3, 6),
    (0x1EC4, 0x1EC4, 13),
    (0x1EC5, 0x1EC5, 6),
    (0x1EC6, 0x1EC6, 13),
    (0x1EC7, 0x1EC7, 6),
    (0x1EC8, 0x1EC8, 13),
    (0x1EC9, 0x1EC9, 6),
    (0x1ECA, 0x1ECA, 13),
    (0x1ECB, 0x1ECB, 6),
    (0x1ECC, 0x1ECC, 13),
    (0x1ECD, 0x1ECD, 6),
    (0x1ECE, 0x1ECE, 13),
    (0x1ECF, 0x1ECF, 6),
    (0x1ED0, 0x1ED0, 13),
    (0x1ED1, 0x1ED1, 6),
    (0x1ED2, 0x1ED2, 13),
    (0x1ED3, 0x1ED3, 6),
    (0x1ED4, 0x1ED4, 13),
    (0x1ED5, 0x1ED5, 6),
    (0x1ED6, 0x1ED6, 13),
    (0x1ED7, 0x1ED7, 6),
    (0x1ED8, 0x1ED8, 13),
    (0x1ED9, 0x1ED9, 6),
    (0x1EDA, 0x1EDA, 13),
    (0x1EDB, 0x1EDB, 6),
    (0x1EDC, 0x1EDC, 13),
    (0x1EDD, 0x1EDD, 6),
    (0x1EDE, 0x1EDE, 13),
    (0x1EDF, 0x1EDF, 6),
    (0x1EE0, 0x1EE0, 13),
    (0x1EE1, 0x1EE1, 6),
    (0x1EE2, 0x1EE2, 13),
    (0x1EE3, 0x1EE3, 6),
    (0x1EE4, 0x1EE4, 13),
    (0x1EE5, 0x1EE5, 6),
    (0x1EE6, 0x1EE6, 13),
    (0x1EE7, 0x1EE7, 6),
    (0x1EE8, 0x1EE8, 13),
    (0x1EE9, 0x1EE9, 6),
    (0x1EEA, 0x1EEA, 13),
    (0x1EEB, 0x1EEB, 6),
    (0x1EEC, 0x1EEC, 13),
    (0x1EED, 0x1EED, 6),
    (0x1EEE, 0x1EEE, 13),
    (0x1EEF, 0x1EEF, 6),
    (0x1EF0, 0x1EF0, 13),
    (0x1EF1, 0x1EF1, 6),
    (0x1EF2, 0x1EF2, 13),
    (0x1EF3, 0x1EF3, 6),
    (0x1EF4, 0x1EF4, 13),
    (0x1EF5, 0x1EF5, 6),
    (0x1EF6, 0x1EF6, 13),
    (0x1EF7, 0x1EF7, 6),
    (0x1EF8, 0x1EF8, 13),
    (0x1EF9, 0x1EF9, 6),
    (0x1EFA, 0x1EFA, 13),
    (0x1EFB, 0x1EFB, 6),
    (0x1EFC, 0x1EFC, 13),
    (0x1EFD, 0x1EFD, 6),
    (0x1EFE, 0x1EFE, 13),
    (0x1EFF, 0x1F07, 6),
    (0x1F08, 0x1F0F, 13),
    (0x1F10, 0x1F15, 6),
    (0x1F18, 0x1F1D, 13),
    (0x1F20, 0x1F27, 6),
    (0x1F28, 0x1F2F, 13),
    (0x1F30, 0x1F37, 6),
    (0x1F38, 0x1F3F, 13),
    (0x1F40, 0x1F45, 6),
    (0x1F48, 0x1F4D, 13),
    (0x1F50, 0x1F57, 6),
    (0x1F59, 0x1F59, 13),
    (0x1F5B, 0x1F5B, 13),
    (0x1F5D, 0x1F5D, 13),
    (0x1F5F, 0x1F5F, 13),
    (0x1F60, 0x1F67, 6),
    (0x1F68, 0x1F6F, 13),
    (0x1F70, 0x1F7D, 6),
    (0x1F80, 0x1F87, 6),
    (0x1F88, 0x1F8F, 13),
    (0x1F90, 0x1F97, 6),
    (0x1F98, 0x1F9F, 13),
    (0x1FA0, 0x1FA7, 6),
    (0x1FA8, 0x1FAF, 13),
    (0x1FB0, 0x1FB4, 6),
    (0x1FB6, 0x1FB7, 6),
    (0x1FB8, 0x1FBC, 13),
    (0x1FBE, 0x1FBE, 6),
    (0x1FC2, 0x1FC4, 6),
    (0x1FC6, 0x1FC7, 6),
    (0x1FC8, 0x1FCC, 13),
    (0x1FD0, 0x1FD3, 6),
    (0x1FD6, 0x1FD7, 6),
    (0x1FD8, 0x1FDB, 13),
    (0x1FE0, 0x1FE7, 6),
    (0x1FE8, 0x1FEC, 13),
    (0x1FF2, 0x1FF4, 6),
    (0x1FF6, 0x1FF7, 6),
    (0x1FF8, 0x1FFC, 13),
    (0x2000, 0x200A, 12),
    (0x200B, 0x200B, 4),
    (0x200C, 0x200D, 3),
    (0x200E, 0x200F, 4),
    (0x2013, 0x2014, 9),
    (0x2018, 0x201F, 2),
    (0x2024, 0x2024, 0),
    (0x2028, 0x2029, 11),
    (0x202A, 0x202E, 4),
    (0x202F, 0x202F, 12),
    (0x2039, 0x203A, 2),
    (0x203C, 0x203D, 10),
    (0x2045, 0x2046, 2),
    (0x2047, 0x2049, 10),
    (0x205F, 0x205F, 12),
    (0x2060, 0x2064, 4),
    (0x2066, 0x206F, 4),
    (0x2071, 0x2071, 6),
    (0x207D, 0x207E, 2),
    (0x207F, 0x207F, 6),
    (0x208D, 0x208E, 2),
    (0x2090, 0x209C, 6),
    (0x20D0, 0x20F0, 3),
    (0x2102, 0x2102, 13),
    (0x2107, 0x2107, 13),
    (0x210A, 0x210A, 6),
    (0x210B, 0x210D, 13),
    (0x210E, 0x210F, 6),
    (0x2110, 0x2112, 13),
    (0x2113, 0x2113, 6),
    (0x2115, 0x2115, 13),
    (0x2119, 0x211D, 13),
    (0x2124, 0x2124, 13),
    (0x2126, 0x2126, 13),
    (0x2128, 0x2128, 13),
    (0x212A, 0x212D, 13),
    (0x212F, 0x212F, 6),
    (0x2130, 0x2133, 13),
    (0x2134, 0x2134, 6),
    (0x2135, 0x2138, 8),
    (0x2139, 0x2139, 6),
    (0x213C, 0x213D, 6),
    (0x213E, 0x213F, 13),
    (0x2145, 0x2145, 13),
    (0x2146, 0x2149, 6),
    (0x214E, 0x214E, 6),
    (0x2160, 0x216F, 13),
    (0x2170, 0x217F, 6),
    (0x2180, 0x2182, 8),
    (0x2183, 0x2183, 13),
    (0x2184, 0x2184, 6),
    (0x2185, 0x2188, 8),
    (0x2308, 0x230B, 2),
    (0x2329, 0x232A, 2),
    (0x24B6, 0x24CF, 13),
    (0x24D0, 0x24E9, 6),
    (0x275B, 0x2760, 2),
    (0x2768, 0x2775, 2),
    (0x27C5, 0x27C6, 2),
    (0x27E6, 0x27EF, 2),
    (0x2983, 0x2998, 2),
    (0x29D8, 0x29DB, 2),
    (0x29FC, 0x29FD, 2),
    (0x2C00, 0x2C2F, 13),
    (0x2C30, 0x2C5F, 6),
    (0x2C60, 0x2C60, 13),
    (0x2C61, 0x2C61, 6),
    (0x2C62, 0x2C64, 13),
    (0x2C65, 0x2C66, 6),
    (0x2C67, 0x2C67, 13),
    (0x2C68, 0x2C68, 6),
    (0x2C69, 0x2C69, 13),
    (0x2C6A, 0x2C6A, 6),
    (0x2C6B, 0x2C6B, 13),
    (0x2C6C, 0x2C6C, 6),
    (0x2C6D, 0x2C70, 13),
    (0x2C71, 0x2C71, 6),
    (0x2C72, 0x2C72, 13),
    (0x2C73, 0x2C74, 6),
    (0x2C75, 0x2C75, 13),
    (0x2C76, 0x2C7D, 6),
    (0x2C7E, 0x2C80, 13),
    (0x2C81, 0x2C81, 6),
    (0x2C82, 0x2C82, 13),
    (0x2C83, 0x2C83, 6),
    (0x2C84, 0x2C84, 13),
    (0x2C85, 0x2C85, 6),
    (0x2C86, 0x2C86, 13),
    (0x2C87, 0x2C87, 6),
    (0x2C88, 0x2C88, 13),
    (0x2C89, 0x2C89, 6),
    (0x2C8A, 0x2C8A, 13),
    (0x2C8B, 0x2C8B, 6),
    (0x2C8C, 0x2C8C, 13),
    (0x2C8D, 0x2C8D, 6),
    (0x2C8E, 0x2C8E, 13),
    (0x2C8F, 0x2C8F, 6),
    (0x2C90, 0x2C90, 13),
    (0x2C91, 0x2C91, 6),
    (0x2C92, 0x2C92, 13),
    (0x2C93, 0x2C93, 6),
    (0x2C94, 0x2C94, 13),
    (0x2C95, 0x2C95, 6),
    (0x2C96, 0x2C96, 13),
    (0x2C97, 0x2C97, 6),
    (0x2C98, 0x2C98, 13),
    (0x2C99, 0x2C99, 6),
    (0x2C9A, 0x2C9A, 13),
    (0x2C9B, 0x2C9B, 6),
    (0x2C9C, 0x2C9C, 13),
    (0x2C9D, 0x2C9D, 6),
    (0x2C9E, 0x2C9E, 13),
    (0x2C9F, 0x2C9F, 6),
    (0x2CA0, 0x2CA0, 13),
    (0x2CA1, 0x2CA1, 6),
    (0x2CA2, 0x2CA2, 13),
    (0x2CA3, 0x2CA3, 6),
    (0x2CA4, 0x2CA4, 13),
    (0x2CA5, 0x2CA5, 6),
    (0x2CA6, 0x2CA6, 13),
    (0x2CA7, 0x2CA7, 6),
    (0x2CA8, 0x2CA8, 13),
    (0x2CA9, 0x2CA9, 6),
    (0x2CAA, 0x2CAA, 13),
    (0x2CAB, 0x2CAB, 6),
    (0x2CAC, 0x2CAC, 13),
    (0x2CAD, 0x2CAD, 6),
    (0x2CAE, 0x2CAE, 13),
    (0x2CAF, 0x2CAF, 6),
    (0x2CB0, 0x2CB0, 13),
    (0x2CB1, 0x2CB1, 6),
    (0x2CB2, 0x2CB2, 13),
    (0x2CB3, 0x2CB3, 6),
    (0x2CB4, 0x2CB4, 13),
    (0x2CB5, 0x2CB5, 6),
    (0x2CB6, 0x2CB6, 13),
    (0x2CB7, 0x2CB7, 6),
    (0x2CB8, 0x2CB8, 13),
    (0x2CB9, 0x2CB9, 6),
    (0x2CBA, 0x2CBA, 13),
    (0x2CBB, 0x2CBB, 6),
    (0x2CBC, 0x2CBC, 13),
    (0x2CBD, 0x2CBD, 6),
    (0x2CBE, 0x2CBE, 13),
    (0x2CBF, 0x2CBF, 6),
    (0x2CC0, 0x2CC0, 13),
    (0x2CC1, 0x2CC1, 6),
    (0x2CC2, 0x2CC2, 13),
    (0x2CC3, 0x2CC3, 6),
    (0x2CC4, 0x2CC4, 13),
    (0x2CC5, 0x2CC5, 6),
    (0x2CC6, 0x2CC6, 13),
    (0x2CC7, 0x2CC7, 6),
    (0x2CC8, 0x2CC8, 13),
    (0x2CC9, 0x2CC9, 6),
    (0x2CCA, 0x2CCA, 13),
    (0x2CCB, 0x2CCB, 6),
    (0x2CCC, 0x2CCC, 13),
    (0x2CCD, 0x2CCD, 6),
    (0x2CCE, 0x2CCE, 13),
    (0x2CCF, 0x2CCF, 6),
    (0x2CD0, 0x2CD0, 13),
    (0x2CD1, 0x2CD1, 6),
    (0x2CD2, 0x2CD2, 13),
    (0x2CD3, 0x2CD3, 6),
    (0x2CD4, 0x2CD4, 13),
    (0x2CD5, 0x2CD5, 6),
    (0x2CD6, 0x2CD6, 13),
    (0x2CD7, 0x2CD7, 6),
    (0x2CD8, 0x2CD8, 13),
    (0x2CD9, 0x2CD9, 6),
    (0x2CDA, 0x2CDA, 13),
    (0x2CDB, 0x2CDB, 6),
    (0x2CDC, 0x2CDC, 13),
    (0x2CDD, 0x2CDD, 6),
    (0x2CDE, 0x2CDE, 13),
    (0x2CDF, 0x2CDF, 6),
    (0x2CE0, 0x2CE0, 13),
    (0x2CE1, 0x2CE1, 6),
    (0x2CE2, 0x2CE2, 13),
    (0x2CE3, 0x2CE4, 6),
    (0x2CEB, 0x2CEB, 13),
    (0x2CEC, 0x2CEC, 6),
    (0x2CED, 0x2CED, 13),
    (0x2CEE, 0x2CEE, 6),
    (0x2CEF, 0x2CF1, 3),
    (0x2CF2, 0x2CF2, 13),
    (0x2CF3, 0x2CF3, 6),
    (0x2D00, 0x2D25, 6),
    (0x2D27, 0x2D27, 6),
    (0x2D2D, 0x2D2D, 6),
    (0x2D30, 0x2D67, 8),
    (0x2D6F, 0x2D6F, 8),
    (0x2D7F, 0x2D7F, 3),
    (0x2D80, 0x2D96, 8),
    (0x2DA0, 0x2DA6, 8),
    (0x2DA8, 0x2DAE, 8),
    (0x2DB0, 0x2DB6, 8),
    (0x2DB8, 0x2DBE, 8),
    (0x2DC0, 0x2DC6, 8),
    (0x2DC8, 0x2DCE, 8),
    (0x2DD0, 0x2DD6, 8),
    (0x2DD8, 0x2DDE, 8),
    (0x2DE0, 0x2DFF, 3),
    (0x2E00, 0x2E0D, 2),
    (0x2E1C, 0x2E1D, 2),
    (0x2E20, 0x2E29, 2),
    (0x2E2E, 0x2E2E, 10),
    (0x2E2F, 0x2E2F, 8),
    (0x2E3C, 0x2E3C, 10),
    (0x2E42, 0x2E42, 2),
    (0x2E53, 0x2E54, 10),
    (0x2E55, 0x2E5C, 2),
    (0x3000, 0x3000, 12),
    (0x3001, 0x3001, 9),
    (0x3002, 0x3002, 10),
    (0x3005, 0x3007, 8),
    (0x3008, 0x3011, 2),
    (0x3014, 0x301B, 2),
    (0x301D, 0x301F, 2),
    (0x3021, 0x3029, 8),
    (0x302A, 0x302F, 3),
    (0x3031, 0x3035, 8),
    (0x3038, 0x303C, 8),
    (0x3041, 0x3096, 8),
    (0x3099, 0x309A, 3),
    (0x309D, 0x309F, 8),
    (0x30A1, 0x30FA, 8),
    (0x30FC, 0x30FF, 8),
    (0x3105, 0x312F, 8),
    (0x3131, 0x318E, 8),
    (0x31A0, 0x31BF, 8),
    (0x31F0, 0x31FF, 8),
    (0x3400, 0x4DBF, 8),
    (0x4E00, 0xA48C, 8),
    (0xA4D0, 0xA4FD, 8),
    (0xA4FF, 0xA4FF, 10),
    (0xA500, 0xA60C, 8),
    (0xA60E, 0xA60F, 10),
    (0xA610, 0xA61F, 8),
    (0xA620, 0xA629, 7),
    (0xA62A, 0xA62B, 8),
    (0xA640, 0xA640, 13),
    (0xA641, 0xA641, 6),
    (0xA642, 0xA642, 13),
    (0xA643, 0xA643, 6),
    (0xA644, 0xA644, 13),
    (0xA645, 0xA645, 6),
    (0xA646, 0xA646, 13),
    (0xA647, 0xA647, 6),
    (0xA648, 0xA648, 13),
    (0xA649, 0xA649, 6),
    (0xA64A, 0xA64A, 13),
    (0xA64B, 0xA64B, 6),
    (0xA64C, 0xA64C, 13),
    (0xA64D, 0xA64D, 6),
    (0xA64E, 0xA64E, 13),
    (0xA64F, 0xA64F, 6),
    (0xA650, 0xA650, 13),
    (0xA651, 0xA651, 6),
    (0xA652, 0xA652, 13),
    (0xA653, 0xA653, 6),
    (0xA654, 0xA654, 13),
    (0xA655, 0xA655, 6),
    (0xA656, 0xA656, 13),
    (0xA657, 0xA657, 6),
    (0xA658, 0xA658, 13),
    (0xA659, 0xA659, 6),
    (0xA65A, 0xA65A, 13),
    (0xA65B, 0xA65B, 6),
    (0xA65C, 0xA65C, 13),
    (0xA65D, 0xA65D, 6),
    (0xA65E, 0xA65E, 13),
    (0xA65F, 0xA65F, 6),
    (0xA660, 0xA660, 13),
    (0xA661, 0xA661, 6),
    (0xA662, 0xA662, 13),
    (0xA663, 0xA663, 6),
    (0xA664, 0xA664, 13),
    (0xA665, 0xA665, 6),
    (0xA666, 0xA666, 13),
    (0xA667, 0xA667, 6),
    (0xA668, 0xA668, 13),
    (0xA669, 0xA669, 6),
    (0xA66A, 0xA66A, 13),
    (0xA66B, 0xA66B, 6),
    (0xA66C, 0xA66C, 13),
    (0xA66D, 0xA66D, 6),
    (0xA66E, 0xA66E, 8),
    (0xA66F, 0xA672, 3),
    (0xA674, 0xA67D, 3),
    (0xA67F, 0xA67F, 8),
    (0xA680, 0xA680, 13),
    (0xA681, 0xA681, 6),
    (0xA682, 0xA682, 13),
    (0xA683, 0xA683, 6),
    (0xA684, 0xA684, 13),
    (0xA685, 0xA685, 6),
    (0xA686, 0xA686, 13),
    (0xA687, 0xA687, 6),
    (0xA688, 0xA688, 13),
    (0xA689, 0xA689, 6),
    (0xA68A, 0xA68A, 13),
    (0xA68B, 0xA68B, 6),
    (0xA68C, 0xA68C, 13),
    (0xA68D, 0xA68D, 6),
    (0xA68E, 0xA68E, 13),
    (0xA68F, 0xA68F, 6),
    (0xA690, 0xA690, 13),
    (0xA691, 0xA691, 6),
    (0xA692, 0xA692, 13),
    (0xA693, 0xA693, 6),
    (0xA694, 0xA694, 13),
    (0xA695, 0xA695, 6),
    (0xA696, 0xA696, 13),
    (0xA697, 0xA697, 6),
    (0xA698, 0xA698, 13),
    (0xA699, 0xA699, 6),
    (0xA69A, 0xA69A, 13),
    (0xA69B, 0xA69D, 6),
    (0xA69E, 0xA69F, 3),
    (0xA6A0, 0xA6EF, 8),
    (0xA6F0, 0xA6F1, 3),
    (0xA6F3, 0xA6F3, 10),
    (0xA6F7, 0xA6F7, 10),
    (0xA717, 0xA71F, 8),
    (0xA722, 0xA722, 13),
    (0xA723, 0xA723, 6),
    (0xA724, 0xA724, 13),
    (0xA725, 0xA725, 6),
    (0xA726, 0xA726, 13),
    (0xA727, 0xA727, 6),
    (0xA728, 0xA728, 13),
    (0xA729, 0xA729, 6),
    (0xA72A, 0xA72A, 13),
    (0xA72B, 0xA72B, 6),
    (0xA72C, 0xA72C, 13),
    (0xA72D, 0xA72D, 6),
    (0xA72E, 0xA72E, 13),
    (0xA72F, 0xA731, 6),
    (0xA732, 0xA732, 13),
    (0xA733, 0xA733, 6),
    (0xA734, 0xA734, 13),
    (0xA735, 0xA735, 6),
    (0xA736, 0xA736, 13),
    (0xA737, 0xA737, 6),
    (0xA738, 0xA738, 13),
    (0xA739, 0xA739, 6),
    (0xA73A, 0xA73A, 13),
    (0xA73B, 0xA73B, 6),
    (0xA73C, 0xA73C, 13),
    (0xA73D, 0xA73D, 6),
    (0xA73E, 0xA73E, 13),
    (0xA73F, 0xA73F, 6),
    (0xA740, 0xA740, 13),
    (0xA741, 0xA741, 6),
    (0xA742, 0xA742, 13),
    (0xA743, 0xA743, 6),
    (0xA744, 0xA744, 13),
    (0xA745, 0xA745, 6),
    (0xA746, 0xA746, 13),
    (0xA747, 0xA747, 6),
    (0xA748, 0xA748, 13),
    (0xA749, 0xA749, 6),
    (0xA74A, 0xA74A, 13),
    (0xA74B, 0xA74B, 6),
    (0xA74C, 0xA74C, 13),
    (0xA74D, 0xA74D, 6),
    (0xA74E, 0xA74E, 13),
    (0xA74F, 0xA74F, 6),
    (0xA750, 0xA750, 13),
    (0xA751, 0xA751, 6),
    (0xA752, 0xA752, 13),
    (0xA753, 0xA753, 6),
    (0xA754, 0xA754, 13),
    (0xA755, 0xA755, 6),
    (0xA756, 0xA756, 13),
    (0xA757, 0xA757, 6),
    (0xA758, 0xA758, 13),
    (0xA759, 0xA759, 6),
    (0xA75A, 0xA75A, 13),
    (0xA75B, 0xA75B, 6),
    (0xA75C, 0xA75C, 13),
    (0xA75D, 0xA75D, 6),
    (0xA75E, 0xA75E, 13),
    (0xA75F, 0xA75F, 6),
    (0xA760, 0xA760, 13),
    (0xA761, 0xA761, 6),
    (0xA762, 0xA762, 13),
    (0xA763, 0xA763, 6),
    (0xA764, 0xA764, 13),
    (0xA765, 0xA765, 6),
    (0xA766, 0xA766, 13),
    (0xA767, 0xA767, 6),
    (0xA768, 0xA768, 13),
    (0xA769, 0xA769, 6),
    (0xA76A, 0xA76A, 13),
    (0xA76B, 0xA76B, 6),
    (0xA76C, 0xA76C, 13),
    (0xA76D, 0xA76D, 6),
    (0xA76E, 0xA76E, 13),
    (0xA76F, 0xA778, 6),
    (0xA779, 0xA779, 13),
    (0xA77A, 0xA77A, 6),
    (0xA77B, 0xA77B, 13),
    (0xA77C, 0xA77C, 6),
    (0xA77D, 0xA77E, 13),
    (0xA77F, 0xA77F, 6),
    (0xA780, 0xA780, 13),
    (0xA781, 0xA781, 6),
    (0xA782, 0xA782, 13),
    (0xA783, 0xA783, 6),
    (0xA784, 0xA784, 13),
    (0xA785, 0xA785, 6),
    (0xA786, 0xA786, 13),
    (0xA787, 0xA787, 6),
    (0xA788, 0xA788, 8),
    (0xA78B, 0xA78B, 13),
    (0xA78C, 0xA78C, 6),
    (0xA78D, 0xA78D, 13),
    (0xA78E, 0xA78E, 6),
    (0xA78F, 0xA78F, 8),
    (0xA790, 0xA790, 13),
    (0xA791, 0xA791, 6),
    (0xA792, 0xA792, 13),
    (0xA793, 0xA795, 6),
    (0xA796, 0xA796, 13),
    (0xA797, 0xA797, 6),
    (0xA798, 0xA798, 13),
    (0xA799, 0xA799, 6),
    (0xA79A, 0xA79A, 13),
    (0xA79B, 0xA79B, 6),
    (0xA79C, 0xA79C, 13),
    (0xA79D, 0xA79D, 6),
    (0xA79E, 0xA79E, 13),
    (0xA79F, 0xA79F, 6),
    (0xA7A0, 0xA7A0, 13),
    (0xA7A1, 0xA7A1, 6),
    (0xA7A2, 0xA7A2, 13),
    (0xA7A3, 0xA7A3, 6),
    (0xA7A4, 0xA7A4, 13),
    (0xA7A5, 0xA7A5, 6),
    (0xA7A6, 0xA7A6, 13),
    (0xA7A7, 0xA7A7, 6),
    (0xA7A8, 0xA7A8, 13),
    (0xA7A9, 0xA7A9, 6),
    (0xA7AA, 0xA7AE, 13),
    (0xA7AF, 0xA7AF, 6),
    (0xA7B0, 0xA7B4, 13),
    (0xA7B5, 0xA7B5, 6),
    (0xA7B6, 0xA7B6, 13),
    (0xA7B7, 0xA7B7, 6),
    (0xA7B8, 0xA7B8, 13),
    (0xA7B9, 0xA7B9, 6),
    (0xA7BA, 0xA7BA, 13),
    (0xA7BB, 0xA7BB, 6),
    (0xA7BC, 0xA7BC, 13),
    (0xA7BD, 0xA7BD, 6),
    (0xA7BE, 0xA7BE, 13),
    (0xA7BF, 0xA7BF, 6),
    (0xA7C0, 0xA7C0, 13),
    (0xA7C1, 0xA7C1, 6),
    (0xA7C2, 0xA7C2, 13),
    (0xA7C3, 0xA7C3, 6),
    (0xA7C4, 0xA7C7, 13),
    (0xA7C8, 0xA7C8, 6),
    (0xA7C9, 0xA7C9, 13),
    (0xA7CA, 0xA7CA, 6),
    (0xA7D0, 0xA7D0, 13),
    (0xA7D1, 0xA7D1, 6),
    (0xA7D3, 0xA7D3, 6),
    (0xA7D5, 0xA7D5, 6),
    (0xA7D6, 0xA7D6, 13),
    (0xA7D7, 0xA7D7, 6),
    (0xA7D8, 0xA7D8, 13),
    (0xA7D9, 0xA7D9, 6),
    (0xA7F2, 0xA7F4, 6),
    (0xA7F5, 0xA7F5, 13),
    (0xA7F6, 0xA7F6, 6),
    (0xA7F7, 0xA7F7, 8),
    (0xA7F8, 0xA7FA, 6),
    (0xA7FB, 0xA801, 8),
    (0xA802, 0xA802, 3),
    (0xA803, 0xA805, 8),
    (0xA806, 0xA806, 3),
    (0xA807, 0xA80A, 8),
    (0xA80B, 0xA80B, 3),
    (0xA80C, 0xA822, 8),
    (0xA823, 0xA827, 3),
    (0xA82C, 0xA82C, 3),
    (0xA840, 0xA873, 8),
    (0xA876, 0xA877, 10),
    (0xA880, 0xA881, 3),
    (0xA882, 0xA8B3, 8),
    (0xA8B4, 0xA8C5, 3),
    (0xA8CE, 0xA8CF, 10),
    (0xA8D0, 0xA8D9, 7),
    (0xA8E0, 0xA8F1, 3),
    (0xA8F2, 0xA8F7, 8),
    (0xA8FB, 0xA8FB, 8),
    (0xA8FD, 0xA8FE, 8),
    (0xA8FF, 0xA8FF, 3),
    (0xA900, 0xA909, 7),
    (0xA90A, 0xA925, 8),
    (0xA926, 0xA92D, 3),
    (0xA92F, 0xA92F, 10),
    (0xA930, 0xA946, 8),
    (0xA947, 0xA953, 3),
    (0xA960, 0xA97C, 8),
    (0xA980, 0xA983, 3),
    (0xA984, 0xA9B2, 8),
    (0xA9B3, 0xA9C0, 3),
    (0xA9C8, 0xA9C9, 10),
    (0xA9CF, 0xA9CF, 8),
    (0xA9D0, 0xA9D9, 7),
    (0xA9E0, 0xA9E4, 8),
    (0xA9E5, 0xA9E5, 3),
    (0xA9E6, 0xA9EF, 8),
    (0xA9F0, 0xA9F9, 7),
    (0xA9FA, 0xA9FE, 8),
    (0xAA00, 0xAA28, 8),
    (0xAA29, 0xAA36, 3),
    (0xAA40, 0xAA42, 8),
    (0xAA43, 0xAA43, 3),
    (0xAA44, 0xAA4B, 8),
    (0xAA4C, 0xAA4D, 3),
    (0xAA50, 0xAA59, 7),
    (0xAA5D, 0xAA5F, 10),
    (0xAA60, 0xAA76, 8),
    (0xAA7A, 0xAA7A, 8),
    (0xAA7B, 0xAA7D, 3),
    (0xAA7E, 0xAAAF, 8),
    (0xAAB0, 0xAAB0, 3),
    (0xAAB1, 0xAAB1, 8),
    (0xAAB2, 0xAAB4, 3),
    (0xAAB5, 0xAAB6, 8),
    (0xAAB7, 0xAAB8, 3),
    (0xAAB9, 0xAABD, 8),
    (0xAABE, 0xAABF, 3),
    (0xAAC0, 0xAAC0, 8),
    (0xAAC1, 0xAAC1, 3),
    (0xAAC2, 0xAAC2, 8),
    (0xAADB, 0xAADD, 8),
    (0xAAE0, 0xAAEA, 8),
    (0xAAEB, 0xAAEF, 3),
    (0xAAF0, 0xAAF1, 10),
    (0xAAF2, 0xAAF4, 8),
    (0xAAF5, 0xAAF6, 3),
    (0xAB01, 0xAB06, 8),
    (0xAB09, 0xAB0E, 8),
    (0xAB11, 0xAB16, 8),
    (0xAB20, 0xAB26, 8),
    (0xAB28, 0xAB2E, 8),
    (0xAB30, 0xAB5A, 6),
    (0xAB5C, 0xAB69, 6),
    (0xAB70, 0xABBF, 6),
    (0xABC0, 0xABE2, 8),
    (0xABE3, 0xABEA, 3),
    (0xABEB, 0xABEB, 10),
    (0xABEC, 0xABED, 3),
    (0xABF0, 0xABF9, 7),
    (0xAC00, 0xD7A3, 8),
    (0xD7B0, 0xD7C6, 8),
    (0xD7CB, 0xD7FB, 8),
    (0xF900, 0xFA6D, 8),
    (0xFA70, 0xFAD9, 8),
    (0xFB00, 0xFB06, 6),
    (0xFB13, 0xFB17, 6),
    (0xFB1D, 0xFB1D, 8),
    (0xFB1E, 0xFB1E, 3),
    (0xFB1F, 0xFB28, 8),
    (0xFB2A, 0xFB36, 8),
    (0xFB38, 0xFB3C, 8),
    (0xFB3E, 0xFB3E, 8),
    (0xFB40, 0xFB41, 8),
    (0xFB43, 0xFB44, 8),
    (0xFB46, 0xFBB1, 8),
    (0xFBD3, 0xFD3D, 8),
    (0xFD3E, 0xFD3F, 2),
    (0xFD50, 0xFD8F, 8),
    (0xFD92, 0xFDC7, 8),
    (0xFDF0, 0xFDFB, 8),
    (0xFE00, 0xFE0F, 3),
    (0xFE10, 0xFE11, 9),
    (0xFE13, 0xFE13, 9),
    (0xFE17, 0xFE18, 2),
    (0xFE20, 0xFE2F, 3),
    (0xFE31, 0xFE32, 9),
    (0xFE35, 0xFE44, 2),
    (0xFE47, 0xFE48, 2),
    (0xFE50, 0xFE51, 9),
    (0xFE52, 0xFE52, 0),
    (0xFE55, 0xFE55, 9),
    (0xFE56, 0xFE57, 10),
    (0xFE58, 0xFE58, 9),
    (0xFE59, 0xFE5E, 2),
    (0xFE63, 0xFE63, 9),
    (0xFE70, 0xFE74, 8),
    (0xFE76, 0xFEFC, 8),
    (0xFEFF, 0xFEFF, 4),
    (0xFF01, 0xFF01, 10),
    (0xFF08, 0xFF09, 2),
    (0xFF0C, 0xFF0D, 9),
    (0xFF0E, 0xFF0E, 0),
    (0xFF10, 0xFF19, 7),
    (0xFF1A, 0xFF1A, 9),
    (0xFF1F, 0xFF1F, 10),
    (0xFF21, 0xFF3A, 13),
    (0xFF3B, 0xFF3B, 2),
    (0xFF3D, 0xFF3D, 2),
    (0xFF41, 0xFF5A, 6),
    (0xFF5B, 0xFF5B, 2),
    (0xFF5D, 0xFF5D, 2),
    (0xFF5F, 0xFF60, 2),
    (0xFF61, 0xFF61, 10),
    (0xFF62, 0xFF63, 2),
    (0xFF64, 0xFF64, 9),
    (0xFF66, 0xFF9D, 8),
    (0xFF9E, 0xFF9F, 3),
    (0xFFA0, 0xFFBE, 8),
    (0xFFC2, 0xFFC7, 8),
    (0xFFCA, 0xFFCF, 8),
    (0xFFD2, 0xFFD7, 8),
    (0xFFDA, 0xFFDC, 8),
    (0xFFF9, 0xFFFB, 4),
    (0x10000, 0x1000B, 8),
    (0x1000D, 0x10026, 8),
    (0x10028, 0x1003A, 8),
    (0x1003C, 0x1003D, 8),
    (0x1003F, 0x1004D, 8),
    (0x10050, 0x1005D, 8),
    (0x10080, 0x100FA, 8),
    (0x10140, 0x10174, 8),
    (0x101FD, 0x101FD, 3),
    (0x10280, 0x1029C, 8),
    (0x102A0, 0x102D0, 8),
    (0x102E0, 0x102E0, 3),
    (0x10300, 0x1031F, 8),
    (0x1032D, 0x1034A, 8),
    (0x10350, 0x10375, 8),
    (0x10376, 0x1037A, 3),
    (0x10380, 0x1039D, 8),
    (0x103A0, 0x103C3, 8),
    (0x103C8, 0x103CF, 8),
    (0x103D1, 0x103D5, 8),
    (0x10400, 0x10427, 13),
    (0x10428, 0x1044F, 6),
    (0x10450, 0x1049D, 8),
    (0x104A0, 0x104A9, 7),
    (0x104B0, 0x104D3, 13),
    (0x104D8, 0x104FB, 6),
    (0x10500, 0x10527, 8),
    (0x10530, 0x10563, 8),
    (0x10570, 0x1057A, 13),
    (0x1057C, 0x1058A, 13),
    (0x1058C, 0x10592, 13),
    (0x10594, 0x10595, 13),
    (0x10597, 0x105A1, 6),
    (0x105A3, 0x105B1, 6),
    (0x105B3, 0x105B9, 6),
    (0x105BB, 0x105BC, 6),
    (0x10600, 0x10736, 8),
    (0x10740, 0x10755, 8),
    (0x10760, 0x10767, 8),
    (0x10780, 0x10780, 6),
    (0x10781, 0x10782, 8),
    (0x10783, 0x10785, 6),
    (0x10787, 0x107B0, 6),
    (0x107B2, 0x107BA, 6),
    (0x10800, 0x10805, 8),
    (0x10808, 0x10808, 8),
    (0x1080A, 0x10835, 8),
    (0x10837, 0x10838, 8),
    (0x1083C, 0x1083C, 8),
    (0x1083F, 0x10855, 8),
    (0x10860, 0x10876, 8),
    (0x10880, 0x1089E, 8),
    (0x108E0, 0x108F2, 8),
    (0x108F4, 0x108F5, 8),
    (0x10900, 0x10915, 8),
    (0x10920, 0x10939, 8),
    (0x10980, 0x109B7, 8),
    (0x109BE, 0x109BF, 8),
    (0x10A00, 0x10A00, 8),
    (0x10A01, 0x10A03, 3),
    (0x10A05, 0x10A06, 3),
    (0x10A0C, 0x10A0F, 3),
    (0x10A10, 0x10A13, 8),
    (0x10A15, 0x10A17, 8),
    (0x10A19, 0x10A35, 8),
    (0x10A38, 0x10A3A, 3),
    (0x10A3F, 0x10A3F, 3),
    (0x10A56, 0x10A57, 10),
    (0x10A60, 0x10A7C, 8),
    (0x10A80, 0x10A9C, 8),
    (0x10AC0, 0x10AC7, 8),
    (0x10AC9, 0x10AE4, 8),
    (0x10AE5, 0x10AE6, 3),
    (0x10B00, 0x10B35, 8),
    (0x10B40, 0x10B55, 8),
    (0x10B60, 0x10B72, 8),
    (0x10B80, 0x10B91, 8),
    (0x10C00, 0x10C48, 8),
    (0x10C80, 0x10CB2, 13),
    (0x10CC0, 0x10CF2, 6),
    (0x10D00, 0x10D23, 8),
    (0x10D24, 0x10D27, 3),
    (0x10D30, 0x10D39, 7),
    (0x10E80, 0x10EA9, 8),
    (0x10EAB, 0x10EAC, 3),
    (0x10EB0, 0x10EB1, 8),
    (0x10EFD, 0x10EFF, 3),
    (0x10F00, 0x10F1C, 8),
    (0x10F27, 0x10F27, 8),
    (0x10F30, 0x10F45, 8),
    (0x10F46, 0x10F50, 3),
    (0x10F55, 0x10F59, 10),
    (0x10F70, 0x10F81, 8),
    (0x10F82, 0x10F85, 3),
    (0x10F86, 0x10F89, 10),
    (0x10FB0, 0x10FC4, 8),
    (0x10FE0, 0x10FF6, 8),
    (0x11000, 0x11002, 3),
    (0x11003, 0x11037, 8),
    (0x11038, 0x11046, 3),
    (0x11047, 0x11048, 10),
    (0x11066, 0x1106F, 7),
    (0x11070, 0x11070, 3),
    (0x11071, 0x11072, 8),
    (0x11073, 0x11074, 3),
    (0x11075, 0x11075, 8),
    (0x1107F, 0x11082, 3),
    (0x11083, 0x110AF, 8),
    (0x110B0, 0x110BA, 3),
    (0x110BD, 0x110BD, 7),
    (0x110BE, 0x110C1, 10),
    (0x110C2, 0x110C2, 3),
    (0x110CD, 0x110CD, 7),
    (0x110D0, 0x110E8, 8),
    (0x110F0, 0x110F9, 7),
    (0x11100, 0x11102, 3),
    (0x11103, 0x11126, 8),
    (0x11127, 0x11134, 3),
    (0x11136, 0x1113F, 7),
    (0x11141, 0x11143, 10),
    (0x11144, 0x11144, 8),
    (0x11145, 0x11146, 3),
    (0x11147, 0x11147, 8),
    (0x11150, 0x11172, 8),
    (0x11173, 0x11173, 3),
    (0x11176, 0x11176, 8),
    (0x11180, 0x11182, 3),
    (0x11183, 0x111B2, 8),
    (0x111B3, 0x111C0, 3),
    (0x111C1, 0x111C4, 8),
    (0x111C5, 0x111C6, 10),
    (0x111C9, 0x111CC, 3),
    (0x111CD, 0x111CD, 10),
    (0x111CE, 0x111CF, 3),
    (0x111D0, 0x111D9, 7),
    (0x111DA, 0x111DA, 8),
    (0x111DC, 0x111DC, 8),
    (0x111DE, 0x111DF, 10),
    (0x11200, 0x11211, 8),
    (0x11213, 0x1122B, 8),
    (0x1122C, 0x11237, 3),
    (0x11238, 0x11239, 10),
    (0x1123B, 0x1123C, 10),
    (0x1123E, 0x1123E, 3),
    (0x1123F, 0x11240, 8),
    (0x11241, 0x11241, 3),
    (0x11280, 0x11286, 8),
    (0x11288, 0x11288, 8),
    (0x1128A, 0x1128D, 8),
    (0x1128F, 0x1129D, 8),
    (0x1129F, 0x112A8, 8),
    (0x112A9, 0x112A9, 10),
    (0x112B0, 0x112DE, 8),
    (0x112DF, 0x112EA, 3),
    (0x112F0, 0x112F9, 7),
    (0x11300, 0x11303, 3),
    (0x11305, 0x1130C, 8),
    (0x1130F, 0x11310, 8),
    (0x11313, 0x11328, 8),
    (0x1132A, 0x11330, 8),
    (0x11332, 0x11333, 8),
    (0x11335, 0x11339, 8),
    (0x1133B, 0x1133C, 3),
    (0x1133D, 0x1133D, 8),
    (0x1133E, 0x11344, 3),
    (0x11347, 0x11348, 3),
    (0x1134B, 0x1134D, 3),
    (0x11350, 0x11350, 8),
    (0x11357, 0x11357, 3),
    (0x1135D, 0x11361, 8),
    (0x11362, 0x11363, 3),
    (0x11366, 0x1136C, 3),
    (0x11370, 0x11374, 3),
    (0x11400, 0x11434, 8),
    (0x11435, 0x11446, 3),
    (0x11447, 0x1144A, 8),
    (0x1144B, 0x1144C, 10),
    (0x11450, 0x11459, 7),
    (0x1145E, 0x1145E, 3),
    (0x1145F, 0x11461, 8),
    (0x11480, 0x114AF, 8),
    (0x114B0, 0x114C3, 3),
    (0x114C4, 0x114C5, 8),
    (0x114C7, 0x114C7, 8),
    (0x114D0, 0x114D9, 7),
    (0x11580, 0x115AE, 8),
    (0x115AF, 0x115B5, 3),
    (0x115B8, 0x115C0, 3),
    (0x115C2, 0x115C3, 10),
    (0x115C9, 0x115D7, 10),
    (0x115D8, 0x115DB, 8),
    (0x115DC, 0x115DD, 3),
    (0x11600, 0x1162F, 8),
    (0x11630, 0x11640, 3),
    (0x11641, 0x11642, 10),
    (0x11644, 0x11644, 8),
    (0x11650, 0x11659, 7),
    (0x11680, 0x116AA, 8),
    (0x116AB, 0x116B7, 3),
    (0x116B8, 0x116B8, 8),
    (0x116C0, 0x116C9, 7),
    (0x11700, 0x1171A, 8),
    (0x1171D, 0x1172B, 3),
    (0x11730, 0x11739, 7),
    (0x1173C, 0x1173E, 10),
    (0x11740, 0x11746, 8),
    (0x11800, 0x1182B, 8),
    (0x1182C, 0x1183A, 3),
    (0x118A0, 0x118BF, 13),
    (0x118C0, 0x118DF, 6),
    (0x118E0, 0x118E9, 7),
    (0x118FF, 0x11906, 8),
    (0x11909, 0x11909, 8),
    (0x1190C, 0x11913, 8),
    (0x11915, 0x11916, 8),
    (0x11918, 0x1192F, 8),
    (0x11930, 0x11935, 3),
    (0x11937, 0x11938, 3),
    (0x1193B, 0x1193E, 3),
    (0x1193F, 0x1193F, 8),
    (0x11940, 0x11940, 3),
    (0x11941, 0x11941, 8),
    (0x11942, 0x11943, 3),
    (0x11944, 0x11944, 10),
    (0x11946, 0x11946, 10),
    (0x11950, 0x11959, 7),
    (0x119A0, 0x119A7, 8),
    (0x119AA, 0x119D0, 8),
    (0x119D1, 0x119D7, 3),
    (0x119DA, 0x119E0, 3),
    (0x119E1, 0x119E1, 8),
    (0x119E3, 0x119E3, 8),
    (0x119E4, 0x119E4, 3),
    (0x11A00, 0x11A00, 8),
    (0x11A01, 0x11A0A, 3),
    (0x11A0B, 0x11A32, 8),
    (0x11A33, 0x11A39, 3),
    (0x11A3A, 0x11A3A, 8),
    (0x11A3B, 0x11A3E, 3),
    (0x11A42, 0x11A43, 10),
    (0x11A47, 0x11A47, 3),
    (0x11A50, 0x11A50, 8),
    (0x11A51, 0x11A5B, 3),
    (0x11A5C, 0x11A89, 8),
    (0x11A8A, 0x11A99, 3),
    (0x11A9B, 0x11A9C, 10),
    (0x11A9D, 0x11A9D, 8),
    (0x11AB0, 0x11AF8, 8),
    (0x11C00, 0x11C08, 8),
    (0x11C0A, 0x11C2E, 8),
    (0x11C2F, 0x11C36, 3),
    (0x11C38, 0x11C3F, 3),
    (0x11C40, 0x11C40, 8),
    (0x11C41, 0x11C42, 10),
    (0x11C50, 0x11C59, 7),
    (0x11C72, 0x11C8F, 8),
    (0x11C92, 0x11CA7, 3),
    (0x11CA9, 0x11CB6, 3),
    (0x11D00, 0x11D06, 8),
    (0x11D08, 0x11D09, 8),
    (0x11D0B, 0x11D30, 8),
    (0x11D31, 0x11D36, 3),
    (0x11D3A, 0x11D3A, 3),
    (0x11D3C, 0x11D3D, 3),
    (0x11D3F, 0x11D45, 3),
    (0x11D46, 0x11D46, 8),
    (0x11D47, 0x11D47, 3),
    (0x11D50, 0x11D59, 7),
    (0x11D60, 0x11D65, 8),
    (0x11D67, 0x11D68, 8),
    (0x11D6A, 0x11D89, 8),
    (0x11D8A, 0x11D8E, 3),
    (0x11D90, 0x11D91, 3),
    (0x11D93, 0x11D97, 3),
    (0x11D98, 0x11D98, 8),
    (0x11DA0, 0x11DA9, 7),
    (0x11EE0, 0x11EF2, 8),
    (0x11EF3, 0x11EF6, 3),
    (0x11EF7, 0x11EF8, 10),
    (0x11F00, 0x11F01, 3),
    (0x11F02, 0x11F02, 8),
    (0x11F03, 0x11F03, 3),
    (0x11F04, 0x11F10, 8),
    (0x11F12, 0x11F33, 8),
    (0x11F34, 0x11F3A, 3),
    (0x11F3E, 0x11F42, 3),
    (0x11F43, 0x11F44, 10),
    (0x11F50, 0x11F59, 7),
    (0x11FB0, 0x11FB0, 8),
    (0x12000, 0x12399, 8),
    (0x12400, 0x1246E, 8),
    (0x12480, 0x12543, 8),
    (0x12F90, 0x12FF0, 8),
    (0x13000, 0x1342F, 8),
    (0x13430, 0x1343F, 4),
    (0x13440, 0x13440, 3),
    (0x13441, 0x13446, 8),
    (0x13447, 0x13455, 3),
    (0x14400, 0x14646, 8),
    (0x16800, 0x16A38, 8),
    (0x16A40, 0x16A5E, 8),
    (0x16A60, 0x16A69, 7),
    (0x16A6E, 0x16A6F, 10),
    (0x16A70, 0x16ABE, 8),
    (0x16AC0, 0x16AC9, 7),
    (0x16AD0, 0x16AED, 8),
    (0x16AF0, 0x16AF4, 3),
    (0x16AF5, 0x16AF5, 10),
    (0x16B00, 0x16B2F, 8),
    (0x16B30, 0x16B36, 3),
    (0x16B37, 0x16B38, 10),
    (0x16B40, 0x16B43, 8),
    (0x16B44, 0x16B44, 10),
    (0x16B50, 0x16B59, 7),
    (0x16B63, 0x16B77, 8),
    (0x16B7D, 0x16B8F, 8),
    (0x16E40, 0x16E5F, 13),
    (0x16E60, 0x16E7F, 6),
    (0x16E98, 0x16E98, 10),
    (0x16F00, 0x16F4A, 8),
    (0x16F4F, 0x16F4F, 3),
    (0x16F50, 0x16F50, 8),
    (0x16F51, 0x16F87, 3),
    (0x16F8F, 0x16F92, 3),
    (0x16F93, 0x16F9F, 8),
    (0x16FE0, 0x16FE1, 8),
    (0x16FE3, 0x16FE3, 8),
    (0x16FE4, 0x16FE4, 3),
    (0x16FF0, 0x16FF1, 3),
    (0x17000, 0x187F7, 8),
    (0x18800, 0x18CD5, 8),
    (0x18D00, 0x18D08, 8),
    (0x1AFF0, 0x1AFF3, 8),
    (0x1AFF5, 0x1AFFB, 8),
    (0x1AFFD, 0x1AFFE, 8),
    (0x1B000, 0x1B122, 8),
    (0x1B132, 0x1B132, 8),
    (0x1B150, 0x1B152, 8),
    (0x1B155, 0x1B155, 8),
    (0x1B164, 0x1B167, 8),
    (0x1B170, 0x1B2FB, 8),
    (0x1BC00, 0x1BC6A, 8),
    (0x1BC70, 0x1BC7C, 8),
    (0x1BC80, 0x1BC88, 8),
    (0x1BC90, 0x1BC99, 8),
    (0x1BC9D, 0x1BC9E, 3),
    (0x1BC9F, 0x1BC9F, 10),
    (0x1BCA0, 0x1BCA3, 4),
    (0x1CF00, 0x1CF2D, 3),
    (0x1CF30, 0x1CF46, 3),
    (0x1D165, 0x1D169, 3),
    (0x1D16D, 0x1D172, 3),
    (0x1D173, 0x1D17A, 4),
    (0x1D17B, 0x1D182, 3),
    (0x1D185, 0x1D18B, 3),
    (0x1D1AA, 0x1D1AD, 3),
    (0x1D242, 0x1D244, 3),
    (0x1D400, 0x1D419, 13),
    (0x1D41A, 0x1D433, 6),
    (0x1D434, 0x1D44D, 13),
    (0x1D44E, 0x1D454, 6),
    (0x1D456, 0x1D467, 6),
    (0x1D468, 0x1D481, 13),
    (0x1D482, 0x1D49B, 6),
    (0x1D49C, 0x1D49C, 13),
    (0x1D49E, 0x1D49F, 13),
    (0x1D4A2, 0x1D4A2, 13),
    (0x1D4A5, 0x1D4A6, 13),
    (0x1D4A9, 0x1D4AC, 13),
    (0x1D4AE, 0x1D4B5, 13),
    (0x1D4B6, 0x1D4B9, 6),
    (0x1D4BB, 0x1D4BB, 6),
    (0x1D4BD, 0x1D4C3, 6),
    (0x1D4C5, 0x1D4CF, 6),
    (0x1D4D0, 0x1D4E9, 13),
    (0x1D4EA, 0x1D503, 6),
    (0x1D504, 0x1D505, 13),
    (0x1D507, 0x1D50A, 13),
    (0x1D50D, 0x1D514, 13),
    (0x1D516, 0x1D51C, 13),
    (0x1D51E, 0x1D537, 6),
    (0x1D538, 0x1D539, 13),
    (0x1D53B, 0x1D53E, 13),
    (0x1D540, 0x1D544, 13),
    (0x1D546, 0x1D546, 13),
    (0x1D54A, 0x1D550, 13),
    (0x1D552, 0x1D56B, 6),
    (0x1D56C, 0x1D585, 13),
    (0x1D586, 0x1D59F, 6),
    (0x1D5A0, 0x1D5B9, 13),
    (0x1D5BA, 0x1D5D3, 6),
    (0x1D5D4, 0x1D5ED, 13),
    (0x1D5EE, 0x1D607, 6),
    (0x1D608, 0x1D621, 13),
    (0x1D622, 0x1D63B, 6),
    (0x1D63C, 0x1D655, 13),
    (0x1D656, 0x1D66F, 6),
    (0x1D670, 0x1D689, 13),
    (0x1D68A, 0x1D6A5, 6),
    (0x1D6A8, 0x1D6C0, 13),
    (0x1D6C2, 0x1D6DA, 6),
    (0x1D6DC, 0x1D6E1, 6),
    (0x1D6E2, 0x1D6FA, 13),
    (0x1D6FC, 0x1D714, 6),
    (0x1D716, 0x1D71B, 6),
    (0x1D71C, 0x1D734, 13),
    (0x1D736, 0x1D74E, 6),
    (0x1D750, 0x1D755, 6),
    (0x1D756, 0x1D76E, 13),
    (0x1D770, 0x1D788, 6),
    (0x1D78A, 0x1D78F, 6),
    (0x1D790, 0x1D7A8, 13),
    (0x1D7AA, 0x1D7C2, 6),
    (0x1D7C4, 0x1D7C9, 6),
    (0x1D7CA, 0x1D7CA, 13),
    (0x1D7CB, 0x1D7CB, 6),
    (0x1D7CE, 0x1D7FF, 7),
    (0x1DA00, 0x1DA36, 3),
    (0x1DA3B, 0x1DA6C, 3),
    (0x1DA75, 0x1DA75, 3),
    (0x1DA84, 0x1DA84, 3),
    (0x1DA88, 0x1DA88, 10),
    (0x1DA9B, 0x1DA9F, 3),
    (0x1DAA1, 0x1DAAF, 3),
    (0x1DF00, 0x1DF09, 6),
    (0x1DF0A, 0x1DF0A, 8),
    (0x1DF0B, 0x1DF1E, 6),
    (0x1DF25, 0x1DF2A, 6),
    (0x1E000, 0x1E006, 3),
    (0x1E008, 0x1E018, 3),
    (0x1E01B, 0x1E021, 3),
    (0x1E023, 0x1E024, 3),
    (0x1E026, 0x1E02A, 3),
    (0x1E030, 0x1E06D, 6),
    (0x1E08F, 0x1E08F, 3),
    (0x1E100, 0x1E12C, 8),
    (0x1E130, 0x1E136, 3),
    (0x1E137, 0x1E13D, 8),
    (0x1E140, 0x1E149, 7),
    (0x1E14E, 0x1E14E, 8),
    (0x1E290, 0x1E2AD, 8),
    (0x1E2AE, 0x1E2AE, 3),
    (0x1E2C0, 0x1E2EB, 8),
    (0x1E2EC, 0x1E2EF, 3),
    (0x1E2F0, 0x1E2F9, 7),
    (0x1E4D0, 0x1E4EB, 8),
    (0x1E4EC, 0x1E4EF, 3),
    (0x1E4F0, 0x1E4F9, 7),
    (0x1E7E0, 0x1E7E6, 8),
    (0x1E7E8, 0x1E7EB, 8),
    (0x1E7ED, 0x1E7EE, 8),
    (0x1E7F0, 0x1E7FE, 8),
    (0x1E800, 0x1E8C4, 8),
    (0x1E8D0, 0x1E8D6, 3),
    (0x1E900, 0x1E921, 13),
    (0x1E922, 0x1E943, 6),
    (0x1E944, 0x1E94A, 3),
    (0x1E94B, 0x1E94B, 8),
    (0x1E950, 0x1E959, 7),
    (0x1EE00, 0x1EE03, 8),
    (0x1EE05, 0x1EE1F, 8),
    (0x1EE21, 0x1EE22, 8),
    (0x1EE24, 0x1EE24, 8),
    (0x1EE27, 0x1EE27, 8),
    (0x1EE29, 0x1EE32, 8),
    (0x1EE34, 0x1EE37, 8),
    (0x1EE39, 0x1EE39, 8),
    (0x1EE3B, 0x1EE3B, 8),
    (0x1EE42, 0x1EE42, 8),
    (0x1EE47, 0x1EE47, 8),
    (0x1EE49, 0x1EE49, 8),
    (0x1EE4B, 0x1EE4B, 8),
    (0x1EE4D, 0x1EE4F, 8),
    (0x1EE51, 0x1EE52, 8),
    (0x1EE54, 0x1EE54, 8),
    (0x1EE57, 0x1EE57, 8),
    (0x1EE59, 0x1EE59, 8),
    (0x1EE5B, 0x1EE5B, 8),
    (0x1EE5D, 0x1EE5D, 8),
    (0x1EE5F, 0x1EE5F, 8),
    (0x1EE61, 0x1EE62, 8),
    (0x1EE64, 0x1EE64, 8),
    (0x1EE67, 0x1EE6A, 8),
    (0x1EE6C, 0x1EE72, 8),
    (0x1EE74, 0x1EE77, 8),
    (0x1EE79, 0x1EE7C, 8),
    (0x1EE7E, 0x1EE7E, 8),
    (0x1EE80, 0x1EE89, 8),
    (0x1EE8B, 0x1EE9B, 8),
    (0x1EEA1, 0x1EEA3, 8),
    (0x1EEA5, 0x1EEA9, 8),
    (0x1EEAB, 0x1EEBB, 8),
    (0x1F130, 0x1F149, 13),
    (0x1F150, 0x1F169, 13),
    (0x1F170, 0x1F189, 13),
    (0x1F676, 0x1F678, 2),
    (0x1FBF0, 0x1FBF9, 7),
    (0x20000, 0x2A6DF, 8),
    (0x2A700, 0x2B739, 8),
    (0x2B740, 0x2B81D, 8),
    (0x2B820, 0x2CEA1, 8),
    (0x2CEB0, 0x2EBE0, 8),
    (0x2EBF0, 0x2EE5D, 8),
    (0x2F800, 0x2FA1D, 8),
    (0x30000, 0x3134A, 8),
    (0x31350, 0x323AF, 8),
    (0xE0001, 0xE0001, 4),
    (0xE0020, 0xE007F, 3),
    (0xE0100, 0xE01EF, 3),
];
